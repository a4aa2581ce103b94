//! Document adapters - Implementations for template rendering and artifact storage.
//!
//! This module provides adapters for the rendering ports:
//! - `FileTemplateSource` - Reads the decree template from disk
//! - `HandlebarsTemplateEngine` - Merges template fields with handlebars
//! - `LocalArtifactStorage` - Stores rendered decrees on local filesystem

mod file_template_source;
mod handlebars_engine;
mod local_artifact_storage;

pub use file_template_source::FileTemplateSource;
pub use handlebars_engine::HandlebarsTemplateEngine;
pub use local_artifact_storage::{LocalArtifactStorage, DEFAULT_MAX_ARTIFACT_BYTES};
