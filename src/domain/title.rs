//! Page title validation.
//!
//! [`TitlePolicy`] is the one place where title rules live. It turns raw input
//! into a [`Title`], and every write path of the service takes a `Title`
//! instead of a `String`, so a title is validated exactly once per request and
//! nothing downstream has to re-check it.
//!
//! # Rules
//!
//! - the title must be present
//! - surrounding whitespace is trimmed before anything else
//! - the trimmed value must not be empty
//! - its length, counted in characters, must lie in `[min_len, max_len]`

use std::fmt;

use serde_json::json;
use thiserror::Error;

use crate::error::AppError;

/// Default minimum title length, in characters.
pub const DEFAULT_MIN_TITLE_LENGTH: usize = 3;

/// Default maximum title length, in characters.
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 30;

/// Reasons a title can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("title is required")]
    Missing,

    #[error("title must not be blank")]
    Blank,

    #[error("title must be at least {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("title must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

impl From<TitleError> for AppError {
    fn from(err: TitleError) -> Self {
        let details = match &err {
            TitleError::Missing | TitleError::Blank => json!({ "field": "title" }),
            TitleError::TooShort { min, actual } => {
                json!({ "field": "title", "min": min, "actual": actual })
            }
            TitleError::TooLong { max, actual } => {
                json!({ "field": "title", "max": max, "actual": actual })
            }
        };

        AppError::bad_request(err.to_string(), details)
    }
}

/// A title that has passed a [`TitlePolicy`]. Always trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Configurable rule set for page titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitlePolicy {
    min_len: usize,
    max_len: usize,
}

impl TitlePolicy {
    /// Creates a policy with the given inclusive length bounds.
    ///
    /// A `min_len` of zero is raised to one: blank titles are never accepted.
    pub fn new(min_len: usize, max_len: usize) -> Self {
        let min_len = min_len.max(1);
        Self {
            min_len,
            max_len: max_len.max(min_len),
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Validates raw input and returns the trimmed [`Title`].
    ///
    /// # Errors
    ///
    /// Returns [`TitleError`] describing the first rule the input breaks.
    pub fn parse(&self, raw: Option<&str>) -> Result<Title, TitleError> {
        let trimmed = raw.ok_or(TitleError::Missing)?.trim();

        if trimmed.is_empty() {
            return Err(TitleError::Blank);
        }

        let actual = trimmed.chars().count();
        if actual < self.min_len {
            return Err(TitleError::TooShort {
                min: self.min_len,
                actual,
            });
        }
        if actual > self.max_len {
            return Err(TitleError::TooLong {
                max: self.max_len,
                actual,
            });
        }

        Ok(Title(trimmed.to_string()))
    }
}

impl Default for TitlePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TITLE_LENGTH, DEFAULT_MAX_TITLE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Title, TitleError> {
        TitlePolicy::default().parse(Some(raw))
    }

    #[test]
    fn test_accepts_bounds() {
        assert_eq!(parse("abc").unwrap().as_str(), "abc");
        assert_eq!(parse(&"a".repeat(30)).unwrap().as_str().len(), 30);
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        assert_eq!(parse("ab"), Err(TitleError::TooShort { min: 3, actual: 2 }));
        assert_eq!(
            parse(&"a".repeat(31)),
            Err(TitleError::TooLong {
                max: 30,
                actual: 31
            })
        );
    }

    #[test]
    fn test_length_is_measured_after_trim() {
        assert_eq!(parse("   ab   "), Err(TitleError::TooShort { min: 3, actual: 2 }));

        let padded = format!("  {}  ", "x".repeat(30));
        assert_eq!(parse(&padded).unwrap().as_str(), "x".repeat(30));
    }

    #[test]
    fn test_rejects_missing_empty_and_blank() {
        let policy = TitlePolicy::default();

        assert_eq!(policy.parse(None), Err(TitleError::Missing));
        assert_eq!(parse(""), Err(TitleError::Blank));
        assert_eq!(parse("     "), Err(TitleError::Blank));
        assert_eq!(parse(&" ".repeat(40)), Err(TitleError::Blank));
        assert_eq!(parse("\t\n "), Err(TitleError::Blank));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // three characters, six bytes
        assert!(parse("äöü").is_ok());
        assert!(parse(&"ж".repeat(30)).is_ok());
    }

    #[test]
    fn test_custom_bounds() {
        let policy = TitlePolicy::new(1, 5);

        assert!(policy.parse(Some("a")).is_ok());
        assert!(policy.parse(Some("abcdef")).is_err());
    }

    #[test]
    fn test_zero_min_is_raised() {
        let policy = TitlePolicy::new(0, 0);

        assert_eq!(policy.min_len(), 1);
        assert_eq!(policy.max_len(), 1);
        assert_eq!(policy.parse(Some(" ")), Err(TitleError::Blank));
    }

    #[test]
    fn test_title_error_maps_to_validation() {
        let err: AppError = TitleError::Blank.into();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
