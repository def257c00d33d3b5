//! HTML rendering of listing pages.

use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::core::error::{PlacesError, Result};
use crate::core::types::PageData;

const TEMPLATE_NAME: &str = "listing";

/// Render `page` with the handlebars template at `template`
///
/// The template is read on every call so edits show up without a
/// restart. Besides the envelope fields it receives `has_prev` and
/// `has_next`.
pub async fn render_listing(template: &Path, page: &PageData) -> Result<String> {
    let source = tokio::fs::read_to_string(template).await.map_err(|e| {
        PlacesError::Template(format!("cannot read {}: {e}", template.display()))
    })?;

    let mut registry = Handlebars::new();
    registry
        .register_template_string(TEMPLATE_NAME, source)
        .map_err(|e| PlacesError::Template(e.to_string()))?;

    let mut context = serde_json::to_value(page)?;
    context["has_prev"] = json!(page.page > 1);
    context["has_next"] = json!(page.page < page.last);

    registry
        .render(TEMPLATE_NAME, &context)
        .map_err(|e| PlacesError::Template(e.to_string()))
}
