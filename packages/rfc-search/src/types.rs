//! Core data types for the RFC search.
//!
//! These types represent the RFC Editor search results table and the
//! sorting options accepted by the search page.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Document format labels that hold the plain text of an RFC, by preference.
pub const TEXT_FORMATS: [&str; 3] = ["ASCII", "TEXT", "TXT"];

/// Column of the search results table, used as the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Number,
    Files,
    Title,
    Authors,
    Date,
    #[serde(rename = "More Info")]
    MoreInfo,
    Status,
}

impl SortField {
    /// All sort fields in table column order.
    pub const ALL: [SortField; 7] = [
        Self::Number,
        Self::Files,
        Self::Title,
        Self::Authors,
        Self::Date,
        Self::MoreInfo,
        Self::Status,
    ];

    /// Get the value sent as the `sortkey` parameter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Files => "Files",
            Self::Title => "Title",
            Self::Authors => "Authors",
            Self::Date => "Date",
            Self::MoreInfo => "More Info",
            Self::Status => "Status",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = SearchError;

    /// Parse a sort field, accepting the wire value or the compact name
    /// (`MoreInfo`) in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| {
                f.as_str().eq_ignore_ascii_case(wanted)
                    || f.as_str().replace(' ', "").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                let fields = Self::ALL
                    .iter()
                    .map(|f| format!("'{f}'"))
                    .collect::<Vec<_>>()
                    .join(", ");
                SearchError::Config(format!(
                    "Invalid sort field '{wanted}', valid fields include {fields}"
                ))
            })
    }
}

/// Sort direction of the search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl SortDirection {
    /// Get the value sent as the `sorting` parameter.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" | "ASCENDING" => Ok(Self::Ascending),
            "DESC" | "DESCENDING" => Ok(Self::Descending),
            other => Err(SearchError::Config(format!(
                "Sort direction must be 'ASC' or 'DESC', got '{other}'"
            ))),
        }
    }
}

/// One row of the search results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecRecord {
    /// RFC number.
    pub id: u32,

    /// Document format label (e.g. "ASCII", "PDF") mapped to its download URL.
    pub files: BTreeMap<String, String>,

    pub title: String,
    pub authors: String,
    pub date: String,
    pub more_info: String,
    pub status: String,

    /// Detail page of the RFC.
    pub page_url: String,
}

impl SpecRecord {
    /// URL of the plain-text document, if the record lists one.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeMap;
    /// use rfc_search::types::SpecRecord;
    ///
    /// let mut files = BTreeMap::new();
    /// files.insert("PDF".to_string(), "https://example.org/rfc1.pdf".to_string());
    /// files.insert("ASCII".to_string(), "https://example.org/rfc1.txt".to_string());
    ///
    /// let record = SpecRecord {
    ///     id: 1,
    ///     files,
    ///     title: "Host Software".to_string(),
    ///     authors: String::new(),
    ///     date: String::new(),
    ///     more_info: String::new(),
    ///     status: String::new(),
    ///     page_url: String::new(),
    /// };
    /// assert_eq!(record.text_url(), Some("https://example.org/rfc1.txt"));
    /// ```
    #[must_use]
    pub fn text_url(&self) -> Option<&str> {
        TEXT_FORMATS
            .iter()
            .find_map(|label| self.files.get(*label))
            .map(String::as_str)
    }

    /// Pretty-printed JSON representation of the record.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Result of interpreting a search results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The results table was present; rows that did not fit were skipped.
    Records(Vec<SpecRecord>),

    /// The search page rejected the query with these messages.
    RemoteValidationErrors(Vec<String>),

    /// The query was accepted but nothing matched.
    NoMatches,
}
