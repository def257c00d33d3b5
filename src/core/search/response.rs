//! Engine response decoding.

use crate::core::types::{Place, PlaceHits};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    total: Option<TotalHits>,
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct TotalHits {
    value: u64,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source", default)]
    source: Place,
}

impl From<SearchResponse> for PlaceHits {
    fn from(response: SearchResponse) -> Self {
        let total = response.hits.total.map(|t| t.value).unwrap_or(0);
        let places = response.hits.hits.into_iter().map(|h| h.source).collect();
        Self { places, total }
    }
}

/// Summary of a bulk response
#[derive(Debug, Deserialize)]
pub(crate) struct BulkResponse {
    #[serde(default)]
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

impl BulkResponse {
    /// Number of items the engine refused
    pub fn failed_items(&self) -> usize {
        self.items
            .iter()
            .filter(|item| {
                item.as_object()
                    .and_then(|ops| ops.values().next())
                    .map(|op| op.get("error").is_some())
                    .unwrap_or(false)
            })
            .count()
    }

    /// First item error, verbatim
    pub fn first_error(&self) -> Option<String> {
        self.items.iter().find_map(|item| {
            item.as_object()
                .and_then(|ops| ops.values().next())
                .and_then(|op| op.get("error"))
                .map(|e| e.to_string())
        })
    }
}
