//! Elasticsearch implementation of [`PlaceStore`].
//!
//! One pooled `reqwest::Client` is shared by every request. Engine
//! rejections are returned with the engine's response body verbatim.

use super::query;
use super::response::{BulkResponse, SearchResponse};
use super::PlaceStore;
use crate::core::config::Config;
use crate::core::dataset::{read_dataset, to_bulk_body};
use crate::core::error::{PlacesError, Result};
use crate::core::types::{Location, PlaceHits};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

/// Engine client bound to one query index
#[derive(Debug, Clone)]
pub struct ElasticStore {
    client: Client,
    base_url: String,
    index: String,
    schema_path: PathBuf,
    dataset_path: PathBuf,
    dataset_has_headers: bool,
    max_result_window: u64,
}

impl ElasticStore {
    /// Build the store and its HTTP client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.engine.request_timeout_sec))
            .build()?;

        Ok(Self {
            client,
            base_url: config.engine.url.trim_end_matches('/').to_string(),
            index: config.engine.index.clone(),
            schema_path: config.paths.schema.clone(),
            dataset_path: config.paths.dataset.clone(),
            dataset_has_headers: config.paths.dataset_has_headers,
            max_result_window: config.engine.max_result_window,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn search(&self, body: Value) -> Result<PlaceHits> {
        let url = self.url(&format!("{}/_search", self.index));
        tracing::debug!(url = %url, "Searching engine");

        let response = self.client.post(&url).json(&body).send().await?;
        let response = ensure_success(response, "search").await?;
        let decoded: SearchResponse = response.json().await?;

        Ok(decoded.into())
    }

    async fn read_schema(&self) -> Result<Value> {
        let bytes = tokio::fs::read(&self.schema_path).await.map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("cannot read schema {}: {e}", self.schema_path.display()),
            )
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Turn a non-2xx engine response into an error carrying its body
async fn ensure_success(response: Response, operation: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(PlacesError::Engine(format!(
        "{operation} rejected by engine ({status}): {body}"
    )))
}

#[async_trait]
impl PlaceStore for ElasticStore {
    async fn list_places(&self, limit: u64, offset: u64) -> Result<PlaceHits> {
        self.search(query::match_all(limit, offset)).await
    }

    async fn count_places(&self) -> Result<u64> {
        Ok(self.search(query::count_only()).await?.total)
    }

    async fn nearest_places(&self, limit: u64, origin: Location) -> Result<PlaceHits> {
        self.search(query::nearest(limit, origin)).await
    }

    async fn create_index(&self, index: &str) -> Result<()> {
        let schema = self.read_schema().await?;

        let response = self.client.put(self.url(index)).json(&schema).send().await?;
        ensure_success(response, &format!("create index '{index}'")).await?;

        tracing::info!(index, "Index created");
        Ok(())
    }

    async fn bulk_load(&self, index: &str) -> Result<(usize, usize)> {
        let path = self.dataset_path.clone();
        let has_headers = self.dataset_has_headers;
        let dataset = tokio::task::spawn_blocking(move || read_dataset(&path, has_headers))
            .await
            .map_err(|e| PlacesError::Dataset(format!("dataset reader failed: {e}")))??;

        let payload = to_bulk_body(index, &dataset)?;
        if payload.documents == 0 {
            return Err(PlacesError::Dataset(format!(
                "no usable rows in {}",
                self.dataset_path.display()
            )));
        }

        tracing::debug!(index, documents = payload.documents, "Sending bulk request");

        let response = self
            .client
            .post(self.url("_bulk"))
            .header(CONTENT_TYPE, "application/x-ndjson")
            .body(payload.body)
            .send()
            .await?;
        let response = ensure_success(response, &format!("bulk load into '{index}'")).await?;
        let bulk: BulkResponse = response.json().await?;

        if bulk.errors {
            return Err(PlacesError::Engine(format!(
                "bulk load into '{index}' failed for {} of {} documents: {}",
                bulk.failed_items(),
                payload.documents,
                bulk.first_error().unwrap_or_default()
            )));
        }

        tracing::info!(
            index,
            documents = payload.documents,
            skipped = payload.skipped,
            "Bulk load complete"
        );
        Ok((payload.documents, payload.skipped))
    }

    async fn set_result_window(&self, index: &str) -> Result<()> {
        let body = query::result_window(self.max_result_window);

        let response = self
            .client
            .put(self.url(&format!("{index}/_settings")))
            .json(&body)
            .send()
            .await?;
        ensure_success(response, &format!("update settings of '{index}'")).await?;

        tracing::info!(index, max_result_window = self.max_result_window, "Result window raised");
        Ok(())
    }
}
