//! Process-memory implementation of the page repository.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::id_generator::IdGenerator;
use crate::domain::entities::{NewPage, Page, UNKNOWN_URL};
use crate::domain::repositories::PageRepository;
use crate::domain::title::Title;
use crate::error::AppError;

/// Ordered in-memory page store.
///
/// Pages live for the lifetime of the process. Every mutation, including the
/// lookup it depends on, runs under a single write-lock acquisition, so
/// concurrent requests never lose updates.
#[derive(Debug, Default)]
pub struct InMemoryPageRepository {
    pages: RwLock<Vec<Page>>,
    ids: IdGenerator,
}

impl InMemoryPageRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `pages`, kept in the given order.
    ///
    /// Newly created pages always get ids greater than any id in `pages`.
    pub fn with_pages(pages: Vec<Page>) -> Self {
        let max_id = pages.iter().map(|p| p.id).max().unwrap_or(0);

        Self {
            pages: RwLock::new(pages),
            ids: IdGenerator::starting_after(max_id),
        }
    }

    /// Creates a store holding the demo pages served by the bundled site.
    pub fn seeded() -> Self {
        Self::with_pages(demo_pages())
    }
}

/// The two demo pages: the landing page and the shop page.
pub fn demo_pages() -> Vec<Page> {
    let now = Utc::now();
    vec![
        Page::new(
            1,
            "Main page".to_string(),
            "./pages/index.html".to_string(),
            now,
        ),
        Page::new(
            2,
            "Shop page".to_string(),
            "./pages/shopPage.html".to_string(),
            now,
        ),
    ]
}

#[async_trait]
impl PageRepository for InMemoryPageRepository {
    async fn find_by_title(&self, title: Option<String>) -> Result<Vec<Page>, AppError> {
        let pages = self.pages.read().await;

        let found = match title.as_deref() {
            Some(filter) if !filter.is_empty() => pages
                .iter()
                .filter(|page| page.title_contains(filter))
                .cloned()
                .collect(),
            _ => pages.to_vec(),
        };

        Ok(found)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Page>, AppError> {
        let pages = self.pages.read().await;
        Ok(pages.iter().find(|page| page.id == id).cloned())
    }

    async fn create(&self, new_page: NewPage) -> Result<Page, AppError> {
        let mut pages = self.pages.write().await;

        // ids are drawn under the lock so store order matches id order
        let page = Page::new(
            self.ids.next_id(),
            new_page.title.into_inner(),
            UNKNOWN_URL.to_string(),
            Utc::now(),
        );

        pages.push(page.clone());
        debug!(id = page.id, "Page stored");

        Ok(page)
    }

    async fn update_title(&self, id: i64, title: Title) -> Result<bool, AppError> {
        let mut pages = self.pages.write().await;

        match pages.iter_mut().find(|page| page.id == id) {
            Some(page) => {
                page.title = title.into_inner();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut pages = self.pages.write().await;

        let before = pages.len();
        pages.retain(|page| page.id != id);

        Ok(pages.len() != before)
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut pages = self.pages.write().await;
        debug!(removed = pages.len(), "Clearing page store");
        pages.clear();
        Ok(())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.pages.read().await.len())
    }
}
