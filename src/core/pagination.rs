//! Page parsing and the listing envelope arithmetic.

use crate::core::error::{PlacesError, Result};
use crate::core::types::{PageData, PlaceHits};

/// Name shown on listing envelopes
pub const LISTING_NAME: &str = "Places";

/// Parse the raw `page` query value; absent means the first page
///
/// Values below 1 are rejected here so no engine query is issued for them.
pub fn parse_page(raw: Option<&str>) -> Result<u64> {
    let raw = match raw {
        None | Some("") => return Ok(1),
        Some(raw) => raw,
    };

    let page: i64 = raw
        .trim()
        .parse()
        .map_err(|_| PlacesError::InvalidParam("invalid 'page' param".to_string()))?;

    if page < 1 {
        return Err(PlacesError::InvalidPage(page));
    }

    Ok(page as u64)
}

/// Offset of the first hit on `page`
pub fn offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Last page number for `total` hits, `ceil(total / limit)`
pub fn last_page(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Build the envelope for `page`, rejecting pages outside `[1, last]`
pub fn page_data(hits: PlaceHits, page: u64, limit: u64) -> Result<PageData> {
    let last = last_page(hits.total, limit);

    if page < 1 || page > last {
        return Err(PlacesError::InvalidPage(
            i64::try_from(page).unwrap_or(i64::MAX),
        ));
    }

    Ok(PageData {
        name: LISTING_NAME.to_string(),
        total: hits.total,
        places: hits.places,
        prev: page.saturating_sub(1),
        next: page + 1,
        last,
        page,
    })
}
