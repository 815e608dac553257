//! Handlers for page endpoints (list, read, create, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::page::{PageQuery, PageView};
use crate::api::middleware::ValidTitle;
use crate::error::AppError;
use crate::state::AppState;

/// Parses the `{id}` path segment.
///
/// A segment that is not an integer cannot name a stored page, so it is
/// reported as not found rather than as a bad request.
fn parse_page_id(raw: &str) -> Result<i64, AppError> {
    raw.trim().parse().map_err(|_| {
        AppError::not_found("Page not found", json!({ "id": raw, "reason": "not a number" }))
    })
}

/// Lists pages, optionally filtered by title.
///
/// # Endpoint
///
/// `GET /pages?title=<substring>`
///
/// Returns every page in insertion order when `title` is absent or empty,
/// otherwise the pages whose title contains it (case-sensitive).
///
/// # Errors
///
/// Returns 400 if the query string cannot be parsed (e.g. `title` repeated).
pub async fn list_pages_handler(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<PageView>>, AppError> {
    let Query(query) = query?;
    let pages = state.page_service.find_pages(query.title).await?;

    Ok(Json(pages.into_iter().map(PageView::from).collect()))
}

/// Returns a single page.
///
/// # Endpoint
///
/// `GET /pages/{id}`
///
/// # Errors
///
/// Returns 404 if the page does not exist.
pub async fn get_page_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PageView>, AppError> {
    let id = parse_page_id(&id)?;
    let page = state.page_service.get_page(id).await?;

    Ok(Json(page.into()))
}

/// Creates a page.
///
/// # Endpoint
///
/// `POST /pages`
///
/// # Request Body
///
/// ```json
/// { "title": "Cart page" }
/// ```
///
/// # Response
///
/// `201 Created` with `{"id": <number>, "title": "Cart page", "url": "unknown"}`.
///
/// # Errors
///
/// Returns 400 if the title is missing or invalid.
pub async fn create_page_handler(
    State(state): State<AppState>,
    ValidTitle(title): ValidTitle,
) -> Result<(StatusCode, Json<PageView>), AppError> {
    let page = state.page_service.create_page(title).await?;

    Ok((StatusCode::CREATED, Json(page.into())))
}

/// Replaces the title of a page.
///
/// # Endpoint
///
/// `PUT /pages/{id}`
///
/// # Errors
///
/// Returns 400 if the title is missing or invalid (checked first).
/// Returns 404 if the page does not exist.
pub async fn update_page_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidTitle(title): ValidTitle,
) -> Result<StatusCode, AppError> {
    let id = parse_page_id(&id)?;
    state.page_service.update_page(id, title).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a page.
///
/// # Endpoint
///
/// `DELETE /pages/{id}`
///
/// # Errors
///
/// Returns 404 if the page does not exist.
pub async fn delete_page_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_page_id(&id)?;
    state.page_service.delete_page(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
