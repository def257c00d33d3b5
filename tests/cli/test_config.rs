//! Tests for the show-config command

use places::cli::commands::config::{execute, ConfigResponse};
use places::cli::commands::ConfigArgs;
use places::cli::OutputFormat;

use crate::common::{create_test_services, FakeStore};

#[tokio::test]
async fn test_show_config_runs() {
    let (services, _store, _files) = create_test_services(FakeStore::default());

    for format in [OutputFormat::Human, OutputFormat::Json] {
        execute(ConfigArgs {}, &services, format).await.unwrap();
    }
}

#[test]
fn test_config_response_redacts_secret() {
    let (services, _store, _files) = create_test_services(FakeStore::default());

    let response = ConfigResponse::from_services(&services);
    let json = serde_json::to_string(&response).unwrap();

    assert!(!json.contains("integration-secret"));
    assert!(!response.default_secret);
    assert_eq!(response.index, "places");
    assert_eq!(response.max_result_window, 15000);
}
