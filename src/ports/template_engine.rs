//! Template Engine Port - Field merging interface.
//!
//! The engine substitutes placeholders and expands list-repetition regions.
//! It knows nothing about decrees; it only sees template bytes and a JSON
//! field map.

use serde_json::Value;
use thiserror::Error;

/// Port for merging a field map into template bytes.
///
/// # Contract
///
/// Implementations must:
/// - Fail on placeholders referring to fields missing from the map
/// - Fail on malformed templates rather than emitting partial output
/// - Leave field values unescaped (the artifact is not HTML)
///
/// # Usage
///
/// ```rust,ignore
/// let engine: &dyn TemplateEngine = get_engine();
/// let artifact = engine.merge(&template_bytes, &fields.to_value())?;
/// ```
pub trait TemplateEngine: Send + Sync {
    /// Merges the fields into the template, returning the artifact bytes.
    ///
    /// # Errors
    ///
    /// - `InvalidEncoding` if the template cannot be read by this engine
    /// - `RenderFailed` on malformed templates or missing fields
    fn merge(&self, template: &[u8], fields: &Value) -> Result<Vec<u8>, TemplateError>;
}

/// A loaded template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDocument {
    /// Source file name, used to derive the artifact's extension.
    pub name: String,
    pub content: Vec<u8>,
}

impl TemplateDocument {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Extension of the template file, if any.
    pub fn extension(&self) -> Option<&str> {
        std::path::Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
    }
}

/// Errors that can occur while loading or merging a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Template source could not be read.
    #[error("Template unavailable at {location}: {reason}")]
    Unavailable { location: String, reason: String },

    /// Template bytes are not in an encoding the engine reads.
    #[error("Template has invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Merge failed on malformed placeholders or missing fields.
    #[error("Template rendering failed: {0}")]
    RenderFailed(String),
}

impl TemplateError {
    /// Creates an unavailable error.
    pub fn unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid encoding error.
    pub fn invalid_encoding(message: impl Into<String>) -> Self {
        Self::InvalidEncoding(message.into())
    }

    /// Creates a render failure error.
    pub fn render_failed(message: impl Into<String>) -> Self {
        Self::RenderFailed(message.into())
    }
}
