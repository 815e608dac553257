//! API route configuration.

use crate::api::handlers::{
    create_page_handler, delete_page_handler, get_page_handler, list_pages_handler,
    reset_data_handler, update_page_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// Page routes, nested under `/pages`.
///
/// # Endpoints
///
/// - `GET    /`      - List pages (optional `title` filter)
/// - `POST   /`      - Create a page
/// - `GET    /{id}`  - Fetch a page
/// - `PUT    /{id}`  - Replace a page title
/// - `DELETE /{id}`  - Delete a page
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_pages_handler).post(create_page_handler))
        .route(
            "/{id}",
            get(get_page_handler)
                .put(update_page_handler)
                .delete(delete_page_handler),
        )
}

/// Test-support routes, nested under `/__test__`.
///
/// # Endpoints
///
/// - `DELETE /data` - Clear the page store
pub fn test_routes() -> Router<AppState> {
    Router::new().route("/data", delete(reset_data_handler))
}
