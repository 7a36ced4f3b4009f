//! Tests for data sources

use super::*;
use crate::error::Error;
use crate::http::HttpClientConfig;
use crate::types::Employee;
use serde_json::json;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn members_json() -> serde_json::Value {
    json!([
        {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
        {"id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "member"},
        {"id": "3", "name": "Arvind Kumar", "email": "arvind@mailinator.com", "role": "admin"}
    ])
}

// ============================================================================
// StaticDataSource Tests
// ============================================================================

#[tokio::test]
async fn test_static_source_returns_records() {
    let records = vec![
        Employee::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
        Employee::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "member"),
    ];
    let source = StaticDataSource::new(records.clone());

    assert_eq!(source.fetch_all().await.unwrap(), records);
    assert_eq!(source.describe(), "static (2 records)");
}

#[tokio::test]
async fn test_boxed_source_delegates() {
    let source: Box<dyn DataSource> = Box::new(StaticDataSource::default());
    assert!(source.fetch_all().await.unwrap().is_empty());
    assert_eq!(source.describe(), "static (0 records)");
}

// ============================================================================
// HttpDataSource Tests
// ============================================================================

#[tokio::test]
async fn test_http_source_fetches_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/members.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(members_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/members.json", mock_server.uri());
    let source = HttpDataSource::new(&url).unwrap();
    let records = source.fetch_all().await.unwrap();

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(records[2].role, "admin");
    assert_eq!(source.url(), url);
}

#[tokio::test]
async fn test_http_source_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/members.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let source = HttpDataSource::new(format!("{}/members.json", mock_server.uri())).unwrap();
    let err = source.fetch_all().await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_http_source_rejects_non_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/members.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"members": []})))
        .mount(&mock_server)
        .await;

    let source = HttpDataSource::new(format!("{}/members.json", mock_server.uri())).unwrap();
    let err = source.fetch_all().await.unwrap_err();

    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn test_http_source_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/members.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(members_json())
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .timeout(Duration::from_millis(50))
        .build();
    let source =
        HttpDataSource::with_config(format!("{}/members.json", mock_server.uri()), config)
            .unwrap();

    assert!(matches!(
        source.fetch_all().await.unwrap_err(),
        Error::Timeout { .. }
    ));
}

// ============================================================================
// FileDataSource Tests
// ============================================================================

#[tokio::test]
async fn test_file_source_reads_array() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", members_json()).unwrap();

    let source = FileDataSource::new(file.path());
    let records = source.fetch_all().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "Aaron Miles");
}

#[tokio::test]
async fn test_file_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileDataSource::new(dir.path().join("absent.json"));

    let err = source.fetch_all().await.unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn test_file_source_invalid_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[{{\"id\": 1").unwrap();

    let source = FileDataSource::new(file.path());
    let err = source.fetch_all().await.unwrap_err();

    assert!(matches!(err, Error::JsonParse(_)));
}
