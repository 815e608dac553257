//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TITLE_MIN_LENGTH` - Shortest accepted page title (default: 3)
//! - `TITLE_MAX_LENGTH` - Longest accepted page title (default: 30)
//! - `ENABLE_TEST_ROUTES` - Mount `DELETE /__test__/data` (default: `true`)
//! - `SEED_PAGES` - Start with the two demo pages (default: `false`)
//! - `PAGES_DIR` - Directory of static HTML served for unmatched paths (optional)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export TITLE_MAX_LENGTH=60
//! export SEED_PAGES=true
//! export PAGES_DIR=./pages
//! ```

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::domain::title::{DEFAULT_MAX_TITLE_LENGTH, DEFAULT_MIN_TITLE_LENGTH, TitlePolicy};

/// Upper limit accepted for `TITLE_MAX_LENGTH`.
const TITLE_LENGTH_LIMIT: usize = 1_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub title_min_length: usize,
    pub title_max_length: usize,
    /// Mounts the `/__test__` routes. Turn off outside of test environments.
    pub enable_test_routes: bool,
    /// Starts the store with the demo pages instead of empty.
    pub seed_pages: bool,
    pub pages_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            title_min_length: DEFAULT_MIN_TITLE_LENGTH,
            title_max_length: DEFAULT_MAX_TITLE_LENGTH,
            enable_test_routes: true,
            seed_pages: false,
            pages_dir: None,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable or a flag is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let title_min_length =
            parse_var("TITLE_MIN_LENGTH")?.unwrap_or(defaults.title_min_length);
        let title_max_length =
            parse_var("TITLE_MAX_LENGTH")?.unwrap_or(defaults.title_max_length);

        let enable_test_routes =
            flag_var("ENABLE_TEST_ROUTES")?.unwrap_or(defaults.enable_test_routes);
        let seed_pages = flag_var("SEED_PAGES")?.unwrap_or(defaults.seed_pages);

        let pages_dir = env::var("PAGES_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            title_min_length,
            title_max_length,
            enable_test_routes,
            seed_pages,
            pages_dir,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - the title bounds are zero, inverted or above the limit
    /// - `pages_dir` is set but is not a directory
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.title_min_length == 0 {
            anyhow::bail!("TITLE_MIN_LENGTH must be at least 1");
        }

        if self.title_max_length < self.title_min_length {
            anyhow::bail!(
                "TITLE_MAX_LENGTH ({}) must not be less than TITLE_MIN_LENGTH ({})",
                self.title_max_length,
                self.title_min_length
            );
        }

        if self.title_max_length > TITLE_LENGTH_LIMIT {
            anyhow::bail!(
                "TITLE_MAX_LENGTH is too large (max: {}), got {}",
                TITLE_LENGTH_LIMIT,
                self.title_max_length
            );
        }

        if let Some(ref dir) = self.pages_dir
            && !dir.is_dir()
        {
            anyhow::bail!("PAGES_DIR '{}' is not a directory", dir.display());
        }

        Ok(())
    }

    /// The title rules derived from this configuration.
    pub fn title_policy(&self) -> TitlePolicy {
        TitlePolicy::new(self.title_min_length, self.title_max_length)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Title length: {}..={}",
            self.title_min_length,
            self.title_max_length
        );
        tracing::info!(
            "  Test routes: {}",
            if self.enable_test_routes { "enabled" } else { "disabled" }
        );
        tracing::info!("  Seed pages: {}", self.seed_pages);

        match self.pages_dir {
            Some(ref dir) => tracing::info!("  Static pages: {}", dir.display()),
            None => tracing::info!("  Static pages: disabled"),
        }
    }
}

/// Reads an optional numeric variable. Unset or empty means `None`.
fn parse_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got '{v}'")),
        _ => Ok(None),
    }
}

/// Reads an optional boolean flag (`true`/`1`/`yes` or `false`/`0`/`no`).
/// Unset or empty means `None`.
fn flag_var(name: &str) -> Result<Option<bool>> {
    let raw = match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => return Ok(None),
    };
    let value = raw.trim();

    if value.eq_ignore_ascii_case("true") || value == "1" || value.eq_ignore_ascii_case("yes") {
        Ok(Some(true))
    } else if value.eq_ignore_ascii_case("false")
        || value == "0"
        || value.eq_ignore_ascii_case("no")
    {
        Ok(Some(false))
    } else {
        anyhow::bail!("{name} must be true/false, 1/0 or yes/no, got '{raw}'")
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
