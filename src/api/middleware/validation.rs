//! Title validation for write requests.

use axum::{
    Json,
    extract::{FromRef, FromRequest, Request},
};
use validator::Validate;

use crate::api::dto::page::PageTitleRequest;
use crate::domain::title::{Title, TitlePolicy};
use crate::error::AppError;

/// Extracts and validates the `{"title": ...}` body of page writes.
///
/// Runs before the handler body: a malformed body, a missing title or a title
/// rejected by the state's [`TitlePolicy`] short-circuits the request with
/// `400 Bad Request`, so neither the handler nor the store is reached.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_page_handler(
///     State(state): State<AppState>,
///     ValidTitle(title): ValidTitle,
/// ) -> Result<(StatusCode, Json<PageView>), AppError> {
///     let page = state.page_service.create_page(title).await?;
///     Ok((StatusCode::CREATED, Json(page.into())))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidTitle(pub Title);

impl<S> FromRequest<S> for ValidTitle
where
    TitlePolicy: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<PageTitleRequest>::from_request(req, state).await?;
        payload.validate()?;

        let title = TitlePolicy::from_ref(state).parse(payload.title.as_deref())?;

        Ok(Self(title))
    }
}
