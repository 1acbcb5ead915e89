//! Error types for the RFC search.
//!
//! Uses the dual-error pattern: `SearchError` for library consumers and the
//! binary, and `ArgError` for command-line validation failures that are
//! reported together with the usage line.

use thiserror::Error;

/// Command-line argument validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    /// One or more tokens did not match any known argument.
    #[error("Unrecognized argument(s): {0}")]
    Unrecognized(String),

    /// Neither an RFC number nor a keyword was given.
    #[error("One of the following arguments is required: -k/--keyword TERM, RFC_ID")]
    MissingRequired,

    /// Both an RFC number and a keyword were given.
    #[error("Invalid argument combination: -k/--keyword TERM, RFC_ID")]
    InvalidCombo,

    /// An argument value could not be accepted.
    #[error("Invalid value for argument '{arg}': {value}")]
    InvalidValue { arg: String, value: String },
}

/// Main error type for the search library.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid command-line or query arguments.
    #[error(transparent)]
    Args(#[from] ArgError),

    /// URL failed validation before any request was made.
    #[error("Invalid URL: '{0}'")]
    InvalidUrl(String),

    /// Server answered with a non-success status.
    #[error("Web request failure: HTTP {status} ({url})")]
    HttpFailure { status: u16, url: String },

    /// Request could not be completed (timeout, connection, body decoding).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Search results page was empty.
    #[error("The given HTML data cannot be empty")]
    EmptyBody,

    /// The only matching RFC has no plain-text document to print.
    #[error("RFC {0} has no plain-text document")]
    NoTextDocument(u32),

    /// Writing results to the output stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid environment configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
