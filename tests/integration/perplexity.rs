//! Perplexity search relay tests
//!
//! Covers `/myqa/perplexity/search`: messages validation, the fail-fast
//! configuration error, the forced `sonar` model, status passthrough, and
//! the diagnostic envelope for non-JSON upstream bodies.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{constants, unreachable_url, TestApp};

fn search_request() -> Value {
    json!({
        "messages": [{ "role": "user", "content": "latest rust release" }]
    })
}

#[tokio::test]
async fn test_missing_messages_is_rejected_with_400() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("'messages' array is required"),
        "error should mention the missing field: {body}"
    );

    // Validation fails before any outbound call is made.
    assert!(app.perplexity.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_non_array_messages_is_rejected_with_400() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&json!({ "messages": "not an array" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_messages_is_rejected_with_400() {
    let app = TestApp::spawn().await;

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&json!({ "messages": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_server_credential_is_a_configuration_error() {
    let app = TestApp::spawn_with(|config| {
        config.perplexity_api_key = None;
    })
    .await;

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&search_request())
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "error": "Configuration error: PERPLEXITY_API_KEY not set on server." })
    );

    // The upstream is never contacted without a credential.
    assert!(app.perplexity.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_model_is_forced_to_sonar() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header(
            "Authorization",
            format!("Bearer {}", constants::TEST_PERPLEXITY_KEY).as_str(),
        ))
        .and(body_json(json!({
            "model": "sonar",
            "messages": [{ "role": "user", "content": "latest rust release" }],
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "ppl-1" })))
        .expect(1)
        .mount(app.perplexity.server())
        .await;

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&search_request())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_stream_flag_is_forwarded_but_defaults_to_false() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_json(json!({
            "model": "sonar",
            "messages": [{ "role": "user", "content": "latest rust release" }],
            "stream": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "ppl-2" })))
        .expect(1)
        .mount(app.perplexity.server())
        .await;

    let mut request = search_request();
    request["stream"] = json!(true);

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&request)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_search_response_is_passed_through() {
    let app = TestApp::spawn().await;
    app.perplexity
        .mock_search_success("Rust 1.80 was released in July 2024.")
        .await;

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&search_request())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(
        body["choices"][0]["message"]["content"],
        "Rust 1.80 was released in July 2024."
    );
}

#[tokio::test]
async fn test_upstream_error_status_is_echoed() {
    let app = TestApp::spawn().await;
    let upstream_body = json!({ "error": { "message": "invalid api key", "type": "auth" } });
    app.perplexity.mock_search(401, upstream_body.clone()).await;

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&search_request())
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body, upstream_body);
}

#[tokio::test]
async fn test_unreachable_upstream_yields_internal_server_error() {
    let app = TestApp::spawn_with(|config| {
        config.perplexity_url = unreachable_url();
    })
    .await;

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&search_request())
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Perplexity proxy internal server error");
    assert!(
        body["details"].is_string(),
        "details should carry the transport failure: {body}"
    );
}

#[tokio::test]
async fn test_non_json_upstream_body_yields_diagnostic_envelope() {
    let app = TestApp::spawn().await;
    app.perplexity
        .mock_search_non_json(404, "<html>404 page not found</html>")
        .await;

    let response = app
        .server
        .post("/myqa/perplexity/search")
        .json(&search_request())
        .await;

    // The route echoes the upstream's own status rather than a fixed 500.
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Non-JSON response from Perplexity. Status: 404");
    assert_eq!(body["perplexity_status"], 404);
    assert_eq!(body["perplexity_raw_body"], "<html>404 page not found</html>");
    assert_eq!(body["perplexity_headers"]["content-type"], "text/html");
    assert!(body["details"].is_string());
}
