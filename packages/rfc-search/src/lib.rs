//! RFC Search - Look up RFC documents on the RFC Editor search page.
//!
//! This crate queries `rfc-editor.org` by RFC number or keyword and either
//! prints the plain text of a single match or a summary table of all
//! matches.
//!
//! # Example
//!
//! ```
//! use rfc_search::parser::parse_search_results;
//! use rfc_search::query::QueryParams;
//! use rfc_search::types::SearchOutcome;
//!
//! // Build the parameters for a keyword search
//! let query = QueryParams::new(0, "TCP").unwrap();
//! assert_eq!(query.title(), Some("TCP"));
//!
//! // A page without results table or error container matched nothing
//! let outcome = parse_search_results("<html><body></body></html>").unwrap();
//! assert_eq!(outcome, SearchOutcome::NoMatches);
//! ```
//!
//! # Architecture
//!
//! - [`query`]: Query parameters for the search page
//! - [`http`]: Transport trait and the blocking HTTP implementation
//! - [`parser`]: Search results page parsing
//! - [`presenter`]: Document or table output for a search outcome
//! - [`search`]: Search service tying the above together
//! - [`types`]: Core data types (SpecRecord, SearchOutcome, sort options)
//! - [`config`]: Configuration constants, environment overrides, URL validation
//! - [`error`]: Error types and Result alias
//! - [`status`]: Error and warning lines on stderr
//! - [`terminal`]: Platform terminal setup
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod parser;
pub mod presenter;
pub mod query;
pub mod search;
pub mod status;
pub mod terminal;
pub mod types;

// Re-export main functions
pub use parser::parse_search_results;
pub use presenter::{present, Presented};
pub use search::search;

// Re-export commonly used items
pub use config::{validate_url, SearchConfig};
pub use error::{ArgError, Result, SearchError};
pub use http::{HttpTransport, Response, Transport};
pub use query::QueryParams;
pub use types::{SearchOutcome, SortDirection, SortField, SpecRecord};
