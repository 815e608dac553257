//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/pages/*`       - Page CRUD API
//! - `/__test__/*`    - Test-support routes (when enabled)
//! - `GET  /health`   - Liveness and page count
//! - everything else  - Static site from `PAGES_DIR` (when configured)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (see [`with_normalized_paths`])

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::PathBuf;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Optional parts of the router.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Mount `/__test__/*`.
    pub enable_test_routes: bool,
    /// Directory served for any path the API does not handle.
    pub pages_dir: Option<PathBuf>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            enable_test_routes: true,
            pages_dir: None,
        }
    }
}

impl From<&Config> for RouterOptions {
    fn from(config: &Config) -> Self {
        Self {
            enable_test_routes: config.enable_test_routes,
            pages_dir: config.pages_dir.clone(),
        }
    }
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, options: &RouterOptions) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .nest("/pages", api::routes::page_routes());

    if options.enable_test_routes {
        router = router.nest("/__test__", api::routes::test_routes());
    }

    if let Some(dir) = &options.pages_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.with_state(state).layer(tracing::layer())
}

/// Wraps the router so `/pages/` and `/pages` hit the same route.
///
/// Path normalization has to run before routing, so it wraps the finished
/// router instead of being added as a router layer.
pub fn with_normalized_paths(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::title::TitlePolicy;
    use crate::infrastructure::persistence::InMemoryPageRepository;
    use axum::body::Body;
    use axum::extract::Request;
    use axum::http::StatusCode;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(
            Arc::new(InMemoryPageRepository::seeded()),
            TitlePolicy::default(),
        )
    }

    fn get_request(uri: &str) -> Request {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let app = with_normalized_paths(app_router(state(), &RouterOptions::default()));

        let response = app.oneshot(get_request("/pages/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_test_routes_can_be_disabled() {
        let options = RouterOptions {
            enable_test_routes: false,
            pages_dir: None,
        };
        let app = app_router(state(), &options);

        let request = Request::builder()
            .method("DELETE")
            .uri("/__test__/data")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_without_pages_dir() {
        let app = app_router(state(), &RouterOptions::default());

        let response = app.oneshot(get_request("/shop")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
