//! Test-support handlers. Mounted only when `ENABLE_TEST_ROUTES` is on.

use axum::{extract::State, http::StatusCode};

use crate::error::AppError;
use crate::state::AppState;

/// Removes every page from the store.
///
/// # Endpoint
///
/// `DELETE /__test__/data`
///
/// Responds `201 Created` with an empty body; automated suites call it before
/// each run to start from an empty store.
pub async fn reset_data_handler(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.page_service.reset().await?;

    Ok(StatusCode::CREATED)
}
