//! Reference coordinate parsing for nearest-place queries.

use crate::core::error::{PlacesError, Result};
use crate::core::types::Location;

/// Name shown on nearest envelopes
pub const NEAREST_NAME: &str = "Recommendation";

/// Parse raw `lat`/`lon` query values into a checked origin
pub fn parse_origin(lat: Option<&str>, lon: Option<&str>) -> Result<Location> {
    let (lat, lon) = match (lat, lon) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
        _ => {
            return Err(PlacesError::InvalidParam(
                "The parameters 'lat' and 'lon' are required".to_string(),
            ))
        }
    };

    let lon = parse_degrees(lon, "lon")?;
    let lat = parse_degrees(lat, "lat")?;
    check_origin(lat, lon)
}

/// Reject coordinates outside the valid degree ranges
pub fn check_origin(lat: f64, lon: f64) -> Result<Location> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(invalid("lat"));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(invalid("lon"));
    }
    Ok(Location { lat, lon })
}

fn parse_degrees(raw: &str, param: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| invalid(param))
}

fn invalid(param: &str) -> PlacesError {
    PlacesError::InvalidParam(format!("invalid '{param}' param"))
}
