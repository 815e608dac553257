//! Collision-free page id source.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Issues page ids derived from the wall clock.
///
/// Each id is the current time in milliseconds since the Unix epoch, bumped to
/// `last + 1` whenever the clock has not advanced (or went backwards) since the
/// previous id. Ids are therefore strictly increasing and never repeat, even
/// for several creates within the same millisecond.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator whose ids are all greater than `id`.
    pub fn starting_after(id: i64) -> Self {
        Self {
            last: AtomicI64::new(id),
        }
    }

    /// Ensures future ids are greater than `id`.
    pub fn observe(&self, id: i64) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }

    /// Returns the next id.
    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let advance = |last: i64| now.max(last.saturating_add(1));

        match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(advance(last)))
        {
            Ok(previous) | Err(previous) => advance(previous),
        }
    }
}
