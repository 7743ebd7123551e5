#![allow(dead_code)]

use axum::Router;
use axum::routing::{get, post};
use axum_test::TestServer;
use quicklink::api::handlers::{health_handler, redirect_handler, shorten_handler};
use quicklink::api::routes::api_routes;
use quicklink::infrastructure::persistence::InMemoryRegistry;
use quicklink::state::AppState;
use quicklink::utils::code_generator::CodeGenerator;
use serde_json::{Value, json};

pub const BASE_URL: &str = "https://s.example.com";

pub fn create_test_state() -> AppState {
    AppState::in_memory(InMemoryRegistry::default(), BASE_URL)
}

pub fn create_state_with_generator(generator: CodeGenerator) -> AppState {
    AppState::in_memory(InMemoryRegistry::new(generator), BASE_URL)
}

/// Same routes as the production router, without path normalization.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_routes())
        .with_state(state)
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_router(state)).unwrap()
}

pub async fn shorten(server: &TestServer, url: &str, custom_code: Option<&str>) -> Value {
    let mut body = json!({ "url": url });
    if let Some(code) = custom_code {
        body["custom_code"] = json!(code);
    }

    let response = server.post("/shorten").json(&body).await;
    response.assert_status_ok();
    response.json::<Value>()
}

pub async fn visit(server: &TestServer, code: &str, times: usize) {
    for _ in 0..times {
        let response = server.get(&format!("/{code}")).await;
        assert_eq!(response.status_code(), 307);
    }
}
