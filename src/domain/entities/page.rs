//! Page entity representing a single stored page record.

use chrono::{DateTime, Utc};

use crate::domain::title::Title;

/// Placeholder URL assigned to every page created through the API.
pub const UNKNOWN_URL: &str = "unknown";

/// A page record held by the store.
///
/// `created_at` is internal bookkeeping and is never part of the public view
/// (see [`crate::api::dto::page::PageView`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Page {
    /// Creates a new Page instance.
    pub fn new(id: i64, title: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            url,
            created_at,
        }
    }

    /// Returns true if the title contains `filter` as a case-sensitive substring.
    ///
    /// An empty filter matches every page.
    pub fn title_contains(&self, filter: &str) -> bool {
        self.title.contains(filter)
    }
}

/// Input data for creating a new page.
///
/// Only a validated [`Title`] can be used, so the store never receives a
/// title that violates the configured policy.
#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: Title,
}

impl NewPage {
    pub fn new(title: Title) -> Self {
        Self { title }
    }
}
