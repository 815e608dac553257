//! Shared application state injected into every handler.

use axum::extract::FromRef;
use std::sync::Arc;

use crate::application::services::PageService;
use crate::domain::title::TitlePolicy;
use crate::infrastructure::persistence::InMemoryPageRepository;

/// Page service backed by the in-memory store.
pub type Pages = PageService<InMemoryPageRepository>;

/// Application state shared by all handlers.
///
/// Each server (and each test) builds its own state, so stores never leak
/// between instances.
#[derive(Clone)]
pub struct AppState {
    pub page_service: Arc<Pages>,
    pub title_policy: TitlePolicy,
}

impl AppState {
    pub fn new(repository: Arc<InMemoryPageRepository>, title_policy: TitlePolicy) -> Self {
        Self {
            page_service: Arc::new(PageService::new(repository)),
            title_policy,
        }
    }
}

impl FromRef<AppState> for TitlePolicy {
    fn from_ref(state: &AppState) -> Self {
        state.title_policy
    }
}
