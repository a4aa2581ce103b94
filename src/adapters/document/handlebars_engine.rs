//! Handlebars implementation of the TemplateEngine port.
//!
//! Placeholders are `{{field}}`; list-repetition regions are
//! `{{#each list}}…{{/each}}` addressing the single-key item objects.

use handlebars::{
    no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext,
};
use serde_json::Value;

use crate::ports::{TemplateEngine, TemplateError};

/// Template engine backed by `handlebars` in strict mode.
///
/// Strict mode turns a placeholder for a missing field into a render error
/// instead of silently printing nothing.
pub struct HandlebarsTemplateEngine {
    registry: Handlebars<'static>,
}

impl HandlebarsTemplateEngine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);
        registry.register_helper("uppercase", Box::new(uppercase_helper));

        Self { registry }
    }
}

impl Default for HandlebarsTemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for HandlebarsTemplateEngine {
    fn merge(&self, template: &[u8], fields: &Value) -> Result<Vec<u8>, TemplateError> {
        let text = std::str::from_utf8(template)
            .map_err(|e| TemplateError::invalid_encoding(e.to_string()))?;

        self.registry
            .render_template(text, fields)
            .map(String::into_bytes)
            .map_err(|e| TemplateError::render_failed(e.to_string()))
    }
}

fn uppercase_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&param.to_uppercase())?;
    Ok(())
}
