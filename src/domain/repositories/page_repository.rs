//! Repository trait for page data access.

use crate::domain::entities::{NewPage, Page};
use crate::domain::title::Title;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing pages.
///
/// Implementations keep pages in insertion order; list results must preserve it.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryPageRepository`] - process-memory store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_page.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Lists pages whose title contains `title` as a substring.
    ///
    /// `None` or an empty filter returns every page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_title(&self, title: Option<String>) -> Result<Vec<Page>, AppError>;

    /// Finds a page by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Page))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<Page>, AppError>;

    /// Stores a new page with a freshly assigned id and `url = "unknown"`.
    async fn create(&self, new_page: NewPage) -> Result<Page, AppError>;

    /// Replaces the title of a page in place.
    ///
    /// Returns `Ok(false)` if no page has the given id.
    async fn update_title(&self, id: i64, title: Title) -> Result<bool, AppError>;

    /// Removes a page.
    ///
    /// Returns `Ok(true)` if a page was removed, `Ok(false)` if not found.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Removes every page.
    async fn clear(&self) -> Result<(), AppError>;

    /// Number of stored pages.
    async fn count(&self) -> Result<usize, AppError>;
}
