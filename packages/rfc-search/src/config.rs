//! Configuration constants and validation functions for the RFC search.

use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

use crate::error::{Result, SearchError};
use crate::types::{SortDirection, SortField};

/// RFC Editor search page.
pub const SEARCH_URL: &str = "https://www.rfc-editor.org/search/rfc_search_detail.php";

/// Source code repository of this application.
pub const REPO_URL: &str = "https://github.com/vandavey/rfc-search";

/// Application name used in usage lines and the terminal title.
pub const APP_NAME: &str = "rfc-search";

/// Earliest publication year known to the RFC registry.
pub const EARLIEST_YEAR: i32 = 1968;

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Maximum number of title characters shown in the results table.
pub const TITLE_MAX_CHARS: usize = 35;

/// Width of the number column in the results table.
pub const NUMBER_COLUMN_WIDTH: usize = 9;

/// Width of the title column in the results table.
pub const TITLE_COLUMN_WIDTH: usize = 41;

/// Environment variable overriding [`SEARCH_URL`].
pub const ENV_SEARCH_URL: &str = "RFC_SEARCH_URL";

/// Environment variable overriding [`HTTP_TIMEOUT_SECS`].
pub const ENV_TIMEOUT_SECS: &str = "RFC_SEARCH_TIMEOUT_SECS";

/// Environment variable selecting the sort field.
pub const ENV_SORT_KEY: &str = "RFC_SEARCH_SORT_KEY";

/// Environment variable selecting the sort direction.
pub const ENV_SORT_DIR: &str = "RFC_SEARCH_SORT_DIR";

/// URL pattern: http(s) scheme followed by the restricted character class.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:http|https)://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|%[0-9a-fA-F]{2})+")
        .expect("valid regex")
});

/// Application title shown in the terminal window.
pub fn app_title() -> String {
    format!("{APP_NAME} ({REPO_URL})")
}

/// Validate a URL before it is handed to the transport.
///
/// Only the prefix is checked: the scheme must be `http` or `https` and at
/// least one character of the allowed class must follow `://`.
///
/// # Examples
/// ```
/// use rfc_search::config::validate_url;
///
/// assert!(validate_url("https://www.rfc-editor.org/rfc/rfc9293.txt").is_ok());
/// assert!(validate_url("ftp://example.org").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<()> {
    if URL_PATTERN.is_match(url.trim()) {
        Ok(())
    } else {
        Err(SearchError::InvalidUrl(url.to_string()))
    }
}

/// Runtime settings for a search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub search_url: String,
    pub timeout: Duration,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            sort_field: SortField::Number,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl SearchConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Unset keys keep their defaults; set but invalid values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_SEARCH_URL) {
            validate_url(&url)?;
            config.search_url = url;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    SearchError::Config(format!("{ENV_TIMEOUT_SECS} must be a positive integer"))
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(key) = lookup(ENV_SORT_KEY) {
            config.sort_field = SortField::from_str(&key)?;
        }

        if let Some(dir) = lookup(ENV_SORT_DIR) {
            config.sort_direction = SortDirection::from_str(&dir)?;
        }

        Ok(config)
    }
}
