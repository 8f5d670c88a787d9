//! Tests for the page-following fetch loop

use super::*;
use crate::http::HttpClientConfig;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(endpoint: &str) -> ExportConfig {
    ExportConfig::new(
        Some("test-key".to_string()),
        Some(endpoint.to_string()),
        None,
        None,
    )
    .unwrap()
}

fn test_client() -> HttpClient {
    HttpClient::with_config(HttpClientConfig::new("test-key").no_rate_limit()).unwrap()
}

#[tokio::test]
async fn test_fetch_all_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes": [{"id": 1}, {"id": 2}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let client = test_client();
    let records = Pager::new(&client, &config).fetch_all().await.unwrap();

    assert_eq!(records, vec![json!({"id": 1}), json!({"id": 2})]);
}

#[tokio::test]
async fn test_fetch_all_follows_next_links_in_order() {
    let mock_server = MockServer::start().await;
    let base = format!("{}/custom_attributes", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .and(query_param_is_missing("cursor"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"attributes": [{"id": 1}, {"id": 2}]}))
                .insert_header("Link", format!("<{base}?cursor=p2>; rel=\"next\"").as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .and(query_param("cursor", "p2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"attributes": [{"id": 3}]}))
                .insert_header(
                    "Link",
                    format!(
                        "<{base}?cursor=p1>; rel=\"prev\", <{base}?cursor=p3>; rel=\"next\""
                    )
                    .as_str(),
                ),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .and(query_param("cursor", "p3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"attributes": [{"id": 4}, {"id": 5}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let client = test_client();
    let records = Pager::new(&client, &config).fetch_all().await.unwrap();

    // All three pages, record order preserved across page boundaries.
    assert_eq!(
        records,
        vec![
            json!({"id": 1}),
            json!({"id": 2}),
            json!({"id": 3}),
            json!({"id": 4}),
            json!({"id": 5}),
        ]
    );
}

#[tokio::test]
async fn test_fetch_all_missing_field_is_empty_page() {
    let mock_server = MockServer::start().await;
    let base = format!("{}/custom_attributes", mock_server.uri());

    // Page without the attributes field still advances via the Link header.
    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .and(query_param_is_missing("cursor"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "success"}))
                .insert_header("Link", format!("<{base}?cursor=p2>; rel=\"next\"").as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .and(query_param("cursor", "p2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"attributes": [{"id": 9}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let client = test_client();
    let records = Pager::new(&client, &config).fetch_all().await.unwrap();

    assert_eq!(records, vec![json!({"id": 9})]);
}

#[tokio::test]
async fn test_fetch_all_non_array_field_is_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"attributes": 42})))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let client = test_client();
    let records = Pager::new(&client, &config).fetch_all().await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_fetch_all_error_status_aborts_run() {
    let mock_server = MockServer::start().await;
    let base = format!("{}/custom_attributes", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .and(query_param_is_missing("cursor"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"attributes": [{"id": 1}]}))
                .insert_header("Link", format!("<{base}?cursor=p2>; rel=\"next\"").as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .and(query_param("cursor", "p2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let client = test_client();
    let err = Pager::new(&client, &config).fetch_all().await.unwrap_err();

    assert!(matches!(
        err,
        crate::error::Error::HttpStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_fetch_all_malformed_body_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/custom_attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let config = test_config(&mock_server.uri());
    let client = test_client();
    let err = Pager::new(&client, &config).fetch_all().await.unwrap_err();

    assert!(matches!(err, crate::error::Error::JsonParse(_)));
}

#[test]
fn test_page_records_extracts_array() {
    let payload = json!({"attributes": [{"id": 1}], "message": "success"});
    assert_eq!(page_records(&payload), vec![json!({"id": 1})]);
}

#[test]
fn test_page_records_defaults_to_empty() {
    assert!(page_records(&json!({})).is_empty());
    assert!(page_records(&json!({"attributes": null})).is_empty());
    assert!(page_records(&json!({"attributes": {"not": "an array"}})).is_empty());
}
