// Test helper functions

use super::fixtures::{FakeStore, TestFiles};
use chrono::{Duration, Utc};
use places::core::config::Config;
use places::core::services::Services;
use std::sync::Arc;

/// Config pointing at the fixture files and at `engine_url`
#[allow(dead_code)] // Used in integration tests
pub fn engine_config(files: &TestFiles, engine_url: &str) -> Config {
    let mut config = Config::default();
    config.engine.url = engine_url.to_string();
    config.engine.index = "places".to_string();
    config.auth.secret = "integration-secret".to_string();
    config.paths.template = files.template.clone();
    config.paths.schema = files.schema.clone();
    config.paths.dataset = files.dataset.clone();
    config.paths.dataset_has_headers = true;
    config
}

/// Services over `store`, configured with the fixture files
///
/// Returns the fixture files too; keep them alive for the test.
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services(store: FakeStore) -> (Arc<Services>, Arc<FakeStore>, TestFiles) {
    let files = TestFiles::new();
    let config = engine_config(&files, "http://127.0.0.1:9");
    let store = Arc::new(store);
    let services = Arc::new(Services::with_store(config, store.clone()));
    (services, store, files)
}

/// Token that expired one minute ago
#[allow(dead_code)] // Used in integration tests
pub fn issue_expired_token(services: &Services) -> String {
    let ttl = services.tokens.ttl();
    let issued_at = Utc::now() - ttl - Duration::minutes(1);
    services
        .tokens
        .issue_at(issued_at)
        .expect("Failed to issue token")
}
