//! Tests for the create-index command

use places::cli::commands::{index, CreateIndexArgs};
use places::cli::OutputFormat;

use crate::common::{create_test_services, sample_places, FakeStore};

#[tokio::test]
async fn test_create_index_human() {
    let (services, store, _files) = create_test_services(FakeStore::with_places(sample_places(4)));
    let args = CreateIndexArgs {
        name: "shops".to_string(),
    };

    index::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap();

    assert_eq!(
        store.calls(),
        vec!["create shops", "bulk shops", "settings shops"]
    );
}

#[tokio::test]
async fn test_create_index_json() {
    let (services, _store, _files) = create_test_services(FakeStore::default());
    let args = CreateIndexArgs {
        name: "shops".to_string(),
    };

    let result = index::execute(args, &services, OutputFormat::Json).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_index_invalid_name() {
    let (services, store, _files) = create_test_services(FakeStore::default());
    let args = CreateIndexArgs {
        name: "_hidden".to_string(),
    };

    let err = index::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("_hidden"));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_create_index_engine_failure() {
    let (services, _store, _files) = create_test_services(FakeStore::failing_on("settings"));
    let args = CreateIndexArgs {
        name: "shops".to_string(),
    };

    let err = index::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("settings refused"));
}
