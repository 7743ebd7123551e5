mod common;

use axum::http::StatusCode;
use quicklink::utils::code_generator::CodeGenerator;
use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_generated_code() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    let code = json["short_code"].as_str().unwrap();
    assert_eq!(code.len(), 7);
    assert_eq!(json["original_url"], "https://example.com");
    assert_eq!(json["short_url"], format!("https://s.example.com/{code}"));
    assert_eq!(json["status"], "created");
    assert_eq!(json["is_custom"], false);
}

#[tokio::test]
async fn test_shorten_with_custom_code() {
    let server = common::test_server(common::create_test_state());

    let json = common::shorten(&server, "https://example.com", Some("my-link")).await;

    assert_eq!(json["short_code"], "my-link");
    assert_eq!(json["short_url"], "https://s.example.com/my-link");
    assert_eq!(json["is_custom"], true);
}

#[tokio::test]
async fn test_shorten_trims_whitespace() {
    let server = common::test_server(common::create_test_state());

    let json = common::shorten(&server, "  https://example.com/path  ", Some(" promo ")).await;

    assert_eq!(json["original_url"], "https://example.com/path");
    assert_eq!(json["short_code"], "promo");
}

#[tokio::test]
async fn test_shorten_blank_custom_code_generates() {
    let server = common::test_server(common::create_test_state());

    let json = common::shorten(&server, "https://example.com", Some("   ")).await;

    assert_eq!(json["is_custom"], false);
    assert_eq!(json["short_code"].as_str().unwrap().len(), 7);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let server = common::test_server(common::create_test_state());

    let response = server.post("/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "empty_url");
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = common::test_server(common::create_test_state());

    let response = server.post("/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "empty_url");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "invalid_url");
    assert_eq!(json["error"]["details"]["url"], "not-a-url");
}

#[tokio::test]
async fn test_shorten_url_with_embedded_newline() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://exa\nmple.com/path", "custom_code": "newline" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "invalid_url");

    server.get("/newline").await.assert_status_not_found();
    let links = server.get("/api/links").await.json::<Value>();
    assert!(links.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_shorten_alias_too_short() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "ab" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "invalid_alias");
}

#[tokio::test]
async fn test_shorten_alias_bad_characters() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "no spaces" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "invalid_alias");
}

#[tokio::test]
async fn test_shorten_reserved_alias() {
    let server = common::test_server(common::create_test_state());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com", "custom_code": "health" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "invalid_alias");
}

#[tokio::test]
async fn test_shorten_alias_taken() {
    let server = common::test_server(common::create_test_state());
    common::shorten(&server, "https://first.com", Some("taken")).await;

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://second.com", "custom_code": "taken" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "alias_taken");
    assert_eq!(json["error"]["details"]["alias"], "taken");

    let original = server.get("/api/links/taken").await.json::<Value>();
    assert_eq!(original["original_url"], "https://first.com");
}

#[tokio::test]
async fn test_shorten_code_space_exhausted() {
    let state = common::create_state_with_generator(CodeGenerator::new("q", 1, 3));
    let server = common::test_server(state);
    common::shorten(&server, "https://one.com", None).await;

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://two.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "code_space_exhausted"
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_creates_two_codes() {
    let server = common::test_server(common::create_test_state());

    let first = common::shorten(&server, "https://example.com", None).await;
    let second = common::shorten(&server, "https://example.com", None).await;

    assert_ne!(first["short_code"], second["short_code"]);
}

#[tokio::test]
async fn test_shorten_non_json_body() {
    let server = common::test_server(common::create_test_state());

    let response = server.post("/shorten").text("https://example.com").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_oversized_url() {
    let server = common::test_server(common::create_test_state());
    let url = format!("https://example.com/{}", "a".repeat(3000));

    let response = server.post("/shorten").json(&json!({ "url": url })).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}
