//! Engine request bodies.

use crate::core::types::Location;
use serde_json::{json, Value};

/// `match_all` page request with an exact total hit count
pub fn match_all(limit: u64, offset: u64) -> Value {
    json!({
        "from": offset,
        "size": limit,
        "track_total_hits": true,
        "query": {
            "match_all": {}
        }
    })
}

/// Total hit count only, no documents
pub fn count_only() -> Value {
    json!({
        "size": 0,
        "track_total_hits": true,
        "query": {
            "match_all": {}
        }
    })
}

/// First `limit` places ordered by arc distance from `origin`
pub fn nearest(limit: u64, origin: Location) -> Value {
    json!({
        "size": limit,
        "track_total_hits": true,
        "sort": [
            {
                "_geo_distance": {
                    "location": {
                        "lat": origin.lat,
                        "lon": origin.lon
                    },
                    "order": "asc",
                    "unit": "km",
                    "mode": "min",
                    "distance_type": "arc",
                    "ignore_unmapped": true
                }
            }
        ]
    })
}

/// Index settings raising the result window
pub fn result_window(max_result_window: u64) -> Value {
    json!({
        "index": {
            "max_result_window": max_result_window
        }
    })
}
