//! Index name rules enforced before any engine call.

use crate::core::error::{PlacesError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

const MAX_INDEX_NAME_BYTES: usize = 255;

static FORBIDDEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\\/*?"<>|,# :A-Z]"#).expect("valid regex"));

/// Check `name` against the engine's index naming rules
pub fn validate_index_name(name: &str) -> Result<()> {
    let reject = |reason: &str| {
        Err(PlacesError::InvalidIndexName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    if name.is_empty() {
        return reject("name is empty");
    }
    if name == "." || name == ".." {
        return reject("'.' and '..' are reserved");
    }
    if name.starts_with(['-', '_', '+']) {
        return reject("must not start with '-', '_' or '+'");
    }
    if name.len() > MAX_INDEX_NAME_BYTES {
        return reject("longer than 255 bytes");
    }
    if let Some(m) = FORBIDDEN.find(name) {
        return reject(&format!("contains forbidden character '{}'", m.as_str()));
    }

    Ok(())
}
