//! Unified service container for places
//!
//! Provides shared access to all core services.

use crate::core::auth::TokenService;
use crate::core::config::Config;
use crate::core::error::{PlacesError, Result};
use crate::core::geo::NEAREST_NAME;
use crate::core::pagination::{last_page, offset, page_data};
use crate::core::search::{validate_index_name, ElasticStore, PlaceStore};
use crate::core::types::{Location, NearestData, PageData, ProvisionReport};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Place queries and index provisioning
    pub store: Arc<dyn PlaceStore>,

    /// Bearer token issuance and verification
    pub tokens: Arc<TokenService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services backed by the configured engine
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(ElasticStore::new(&config)?);
        Ok(Self::with_store(config, store))
    }

    /// Create services around an existing store
    pub fn with_store(config: Config, store: Arc<dyn PlaceStore>) -> Self {
        let tokens = Arc::new(TokenService::from_config(&config.auth));

        Self {
            store,
            tokens,
            config: Arc::new(config),
        }
    }

    /// Fetch listing page `page` (1-based) with the configured page size
    ///
    /// Pages past the last one are rejected once the total is known. A
    /// page reaching beyond the engine's result window is checked against
    /// a count first, since the engine refuses to page that far.
    pub async fn list_page(&self, page: u64) -> Result<PageData> {
        let limit = self.config.pagination.list_page_size;
        let offset = offset(page, limit);

        if offset.saturating_add(limit) > self.config.engine.max_result_window {
            let total = self.store.count_places().await?;
            if page > last_page(total, limit) {
                return Err(PlacesError::InvalidPage(
                    i64::try_from(page).unwrap_or(i64::MAX),
                ));
            }
        }

        let hits = self.store.list_places(limit, offset).await?;
        page_data(hits, page, limit)
    }

    /// Fetch the places closest to `origin`
    pub async fn nearest(&self, origin: Location) -> Result<NearestData> {
        let limit = self.config.pagination.nearest_size;
        let hits = self.store.nearest_places(limit, origin).await?;

        Ok(NearestData {
            name: NEAREST_NAME.to_string(),
            places: hits.places,
        })
    }

    /// Create `index`, bulk load the dataset into it and raise its result window
    ///
    /// Stops at the first failing step.
    pub async fn provision_index(&self, index: &str) -> Result<ProvisionReport> {
        validate_index_name(index)?;

        self.store.create_index(index).await?;
        let (documents, skipped) = self.store.bulk_load(index).await?;
        self.store.set_result_window(index).await?;

        Ok(ProvisionReport {
            index: index.to_string(),
            documents,
            skipped,
        })
    }
}
