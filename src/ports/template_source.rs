//! Template Source Port - where the decree template is read from.

use async_trait::async_trait;

use super::template_engine::{TemplateDocument, TemplateError};

/// Port for loading the decree template.
///
/// Loaded once per issuance so template edits take effect without restart.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Loads the current template.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Unavailable` if the template cannot be read.
    async fn load(&self) -> Result<TemplateDocument, TemplateError>;
}
