//! Page management service.

use crate::domain::entities::{NewPage, Page};
use crate::domain::repositories::PageRepository;
use crate::domain::title::Title;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for listing, reading and mutating pages.
///
/// Titles arrive already validated as [`Title`]; the service turns missing
/// pages into [`AppError::NotFound`] and logs every mutation.
pub struct PageService<R: PageRepository> {
    repository: Arc<R>,
}

impl<R: PageRepository> PageService<R> {
    /// Creates a new page service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists pages, optionally narrowed to titles containing `title`.
    ///
    /// Matching is a case-sensitive substring test. Insertion order is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn find_pages(&self, title: Option<String>) -> Result<Vec<Page>, AppError> {
        let pages = self.repository.find_by_title(title).await?;
        tracing::debug!(count = pages.len(), "Pages listed");
        Ok(pages)
    }

    /// Retrieves a page by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no page has the given id.
    pub async fn get_page(&self, id: i64) -> Result<Page, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| page_not_found(id))
    }

    /// Creates a page with the given title.
    ///
    /// The page receives a fresh id and the `"unknown"` placeholder URL.
    pub async fn create_page(&self, title: Title) -> Result<Page, AppError> {
        let page = self.repository.create(NewPage::new(title)).await?;
        tracing::info!(id = page.id, title = %page.title, "Page created");
        Ok(page)
    }

    /// Replaces the title of an existing page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no page has the given id.
    pub async fn update_page(&self, id: i64, title: Title) -> Result<(), AppError> {
        if !self.repository.update_title(id, title).await? {
            return Err(page_not_found(id));
        }

        tracing::info!(id, "Page updated");
        Ok(())
    }

    /// Deletes a page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no page has the given id.
    pub async fn delete_page(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(page_not_found(id));
        }

        tracing::info!(id, "Page deleted");
        Ok(())
    }

    /// Removes every page. Used by the test-support routes.
    pub async fn reset(&self) -> Result<(), AppError> {
        self.repository.clear().await?;
        tracing::info!("Page store reset");
        Ok(())
    }

    /// Number of stored pages.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

fn page_not_found(id: i64) -> AppError {
    AppError::not_found("Page not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UNKNOWN_URL;
    use crate::domain::repositories::MockPageRepository;
    use crate::domain::title::TitlePolicy;
    use chrono::Utc;

    fn create_test_page(id: i64, title: &str) -> Page {
        Page::new(id, title.to_string(), UNKNOWN_URL.to_string(), Utc::now())
    }

    fn title(raw: &str) -> Title {
        TitlePolicy::default().parse(Some(raw)).unwrap()
    }

    #[tokio::test]
    async fn test_find_pages_passes_filter() {
        let mut mock_repo = MockPageRepository::new();

        let pages = vec![create_test_page(1, "Cart page")];
        mock_repo
            .expect_find_by_title()
            .withf(|filter| filter.as_deref() == Some("Cart"))
            .times(1)
            .returning(move |_| Ok(pages.clone()));

        let service = PageService::new(Arc::new(mock_repo));

        let result = service.find_pages(Some("Cart".to_string())).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Cart page");
    }

    #[tokio::test]
    async fn test_get_page_success() {
        let mut mock_repo = MockPageRepository::new();

        let page = create_test_page(42, "Shop page");
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 42)
            .times(1)
            .returning(move |_| Ok(Some(page.clone())));

        let service = PageService::new(Arc::new(mock_repo));

        let result = service.get_page(42).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().title, "Shop page");
    }

    #[tokio::test]
    async fn test_get_page_not_found() {
        let mut mock_repo = MockPageRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PageService::new(Arc::new(mock_repo));

        let result = service.get_page(7).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_page_forwards_title() {
        let mut mock_repo = MockPageRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_page| new_page.title.as_str() == "Cart page")
            .times(1)
            .returning(|new_page| Ok(create_test_page(1, new_page.title.as_str())));

        let service = PageService::new(Arc::new(mock_repo));

        let page = service.create_page(title("  Cart page  ")).await.unwrap();

        assert_eq!(page.title, "Cart page");
        assert_eq!(page.url, UNKNOWN_URL);
    }

    #[tokio::test]
    async fn test_update_page_not_found() {
        let mut mock_repo = MockPageRepository::new();

        mock_repo
            .expect_update_title()
            .times(1)
            .returning(|_, _| Ok(false));

        let service = PageService::new(Arc::new(mock_repo));

        let result = service.update_page(-100, title("good title")).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_page_success() {
        let mut mock_repo = MockPageRepository::new();

        mock_repo
            .expect_update_title()
            .withf(|id, title| *id == 5 && title.as_str() == "good new title")
            .times(1)
            .returning(|_, _| Ok(true));

        let service = PageService::new(Arc::new(mock_repo));

        assert!(service.update_page(5, title("good new title")).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_page_success() {
        let mut mock_repo = MockPageRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|_| Ok(true));

        let service = PageService::new(Arc::new(mock_repo));

        assert!(service.delete_page(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_page_not_found() {
        let mut mock_repo = MockPageRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = PageService::new(Arc::new(mock_repo));

        let result = service.delete_page(3).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_reset_clears_repository() {
        let mut mock_repo = MockPageRepository::new();

        mock_repo.expect_clear().times(1).returning(|| Ok(()));

        let service = PageService::new(Arc::new(mock_repo));

        assert!(service.reset().await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut mock_repo = MockPageRepository::new();

        mock_repo
            .expect_find_by_title()
            .times(1)
            .returning(|_| Err(AppError::internal("storage unavailable", json!({}))));

        let service = PageService::new(Arc::new(mock_repo));

        let result = service.find_pages(None).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
