//! Search adapter over an Elasticsearch-compatible engine.
//!
//! Handlers depend on the [`PlaceStore`] trait; [`ElasticStore`] is the
//! production implementation talking to the engine's REST API.

mod elastic;
mod naming;
pub mod query;
mod response;

pub use elastic::ElasticStore;
pub use naming::validate_index_name;

use crate::core::error::Result;
use crate::core::types::{Location, PlaceHits};
use async_trait::async_trait;

/// Place queries and index provisioning against the engine
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// One page of every place plus the total hit count
    async fn list_places(&self, limit: u64, offset: u64) -> Result<PlaceHits>;

    /// Total number of places, without fetching any
    async fn count_places(&self) -> Result<u64>;

    /// The `limit` places closest to `origin`, nearest first
    async fn nearest_places(&self, limit: u64, origin: Location) -> Result<PlaceHits>;

    /// Create `index` with the configured mapping
    async fn create_index(&self, index: &str) -> Result<()>;

    /// Load the configured dataset into `index` in one bulk call
    ///
    /// Returns the number of documents sent and the number of dataset
    /// rows skipped.
    async fn bulk_load(&self, index: &str) -> Result<(usize, usize)>;

    /// Raise the result window of `index`
    async fn set_result_window(&self, index: &str) -> Result<()>;
}
