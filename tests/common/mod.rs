#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use pages_service::domain::entities::Page;
use pages_service::domain::title::TitlePolicy;
use pages_service::infrastructure::persistence::InMemoryPageRepository;
use pages_service::routes::{RouterOptions, app_router, with_normalized_paths};
use pages_service::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryPageRepository::new()),
        TitlePolicy::default(),
    )
}

pub fn create_seeded_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryPageRepository::seeded()),
        TitlePolicy::default(),
    )
}

pub fn make_server(state: AppState) -> TestServer {
    make_server_with(state, RouterOptions::default())
}

/// Serves the app the way `server::run` does, trailing-slash normalization included.
pub fn make_server_with(state: AppState, options: RouterOptions) -> TestServer {
    let app = with_normalized_paths(app_router(state, &options));
    TestServer::new(Router::new().fallback_service(app)).unwrap()
}

/// Creates a page through the API and returns the response body.
pub async fn create_test_page(server: &TestServer, title: &str) -> Value {
    let response = server.post("/pages").json(&json!({ "title": title })).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn list_pages(server: &TestServer) -> Value {
    let response = server.get("/pages").await;
    response.assert_status_ok();
    response.json::<Value>()
}

pub fn titles(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(|p| p.title.as_str()).collect()
}
