//! Tests for the list-places and nearest-places commands

use places::cli::commands::{list, nearest, ListArgs, NearestArgs};
use places::cli::OutputFormat;

use crate::common::{create_test_services, sample_places, FakeStore};

#[tokio::test]
async fn test_list_places_page() {
    let (services, store, _files) = create_test_services(FakeStore::with_places(sample_places(15)));

    list::execute(ListArgs { page: 2 }, &services, OutputFormat::Human)
        .await
        .unwrap();

    assert_eq!(store.calls(), vec!["list 10 10"]);
}

#[tokio::test]
async fn test_list_places_json() {
    let (services, _store, _files) = create_test_services(FakeStore::with_places(sample_places(3)));

    let result = list::execute(ListArgs { page: 1 }, &services, OutputFormat::Json).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_places_page_zero() {
    let (services, store, _files) = create_test_services(FakeStore::with_places(sample_places(3)));

    let result = list::execute(ListArgs { page: 0 }, &services, OutputFormat::Human).await;

    assert!(result.is_err());
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_list_places_past_last() {
    let (services, _store, _files) = create_test_services(FakeStore::with_places(sample_places(3)));

    let err = list::execute(ListArgs { page: 2 }, &services, OutputFormat::Human)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid 'page' value: '2'");
}

#[tokio::test]
async fn test_nearest_places() {
    let (services, store, _files) = create_test_services(FakeStore::with_places(sample_places(6)));
    let args = NearestArgs {
        lat: 55.02,
        lon: 37.6,
    };

    nearest::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap();

    assert_eq!(store.calls(), vec!["nearest 3"]);
}

#[tokio::test]
async fn test_nearest_places_empty_index() {
    let (services, _store, _files) = create_test_services(FakeStore::default());
    let args = NearestArgs { lat: 0.0, lon: 0.0 };

    let result = nearest::execute(args, &services, OutputFormat::Human).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_nearest_places_out_of_range() {
    let (services, store, _files) = create_test_services(FakeStore::default());
    let args = NearestArgs {
        lat: 91.0,
        lon: 37.6,
    };

    let err = nearest::execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "invalid 'lat' param");
    assert!(store.calls().is_empty());
}
