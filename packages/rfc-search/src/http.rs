//! HTTP transport for the RFC Editor search page and document downloads.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::config::validate_url;
use crate::error::{Result, SearchError};

/// User agent string identifying this application.
const USER_AGENT: &str = concat!("rfc-search/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single blocking GET request.
pub trait Transport {
    /// Request `url` with `params` appended as the query string.
    fn fetch(&self, url: &str, params: &[(&str, String)]) -> Result<Response>;
}

/// Transport backed by a `reqwest` blocking client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: create_client(timeout)?,
        })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str, params: &[(&str, String)]) -> Result<Response> {
        let parsed = if params.is_empty() {
            Url::parse(url)
        } else {
            Url::parse_with_params(url, params.iter().map(|(k, v)| (*k, v.as_str())))
        };
        let url = parsed.map_err(|_| SearchError::InvalidUrl(url.to_string()))?;

        tracing::debug!(url = %url, "Sending request");

        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        tracing::debug!(status, bytes = body.len(), "Received response");
        Ok(Response { status, body })
    }
}

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with the given timeout and user agent.
pub fn create_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Fetch a URL and return its body.
///
/// The URL is validated before the transport is used. Any non-2xx status is
/// a terminal [`SearchError::HttpFailure`]; nothing is retried.
pub fn fetch_text<T>(transport: &T, url: &str, params: &[(&str, String)]) -> Result<String>
where
    T: Transport + ?Sized,
{
    validate_url(url)?;

    let response = transport.fetch(url.trim(), params)?;
    if !response.is_success() {
        return Err(SearchError::HttpFailure {
            status: response.status,
            url: url.to_string(),
        });
    }

    Ok(response.body)
}
