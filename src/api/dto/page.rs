//! DTOs for page endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Page;

/// Public representation of a page: `{id, title, url}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub id: i64,
    pub title: String,
    pub url: String,
}

impl From<Page> for PageView {
    fn from(page: Page) -> Self {
        Self {
            id: page.id,
            title: page.title,
            url: page.url,
        }
    }
}

/// Query string of `GET /pages`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Substring the title must contain.
    pub title: Option<String>,
}

/// Body of `POST /pages` and `PUT /pages/{id}`.
///
/// Only presence is checked here; the title rules themselves are applied by
/// [`crate::domain::title::TitlePolicy`].
#[derive(Debug, Deserialize, Validate)]
pub struct PageTitleRequest {
    #[validate(required(message = "title is required"))]
    pub title: Option<String>,
}
