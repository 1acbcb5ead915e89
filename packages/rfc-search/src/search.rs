//! Search service that ties the query, transport and parser together.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::http::{fetch_text, Transport};
use crate::parser::parse_search_results;
use crate::query::QueryParams;
use crate::types::SearchOutcome;

/// Run a search against the configured search page.
///
/// # Arguments
/// * `transport` - Transport used for the single search request
/// * `config` - Search page location
/// * `query` - Validated query parameters
///
/// # Returns
/// The interpreted results page
pub fn search<T>(transport: &T, config: &SearchConfig, query: &QueryParams) -> Result<SearchOutcome>
where
    T: Transport + ?Sized,
{
    tracing::info!(
        id = query.id(),
        title = query.title(),
        sort = %query.sort_field(),
        "Searching RFC Editor"
    );

    let body = fetch_text(transport, &config.search_url, &query.to_params())?;
    let outcome = parse_search_results(&body)?;

    match &outcome {
        SearchOutcome::Records(records) => {
            tracing::info!(count = records.len(), "Search returned records");
            for record in records {
                match record.to_json() {
                    Ok(json) => tracing::debug!("rfc{}: {json}", record.id),
                    Err(e) => tracing::debug!(id = record.id, error = %e, "Cannot serialize record"),
                }
            }
        }
        SearchOutcome::RemoteValidationErrors(messages) => {
            tracing::info!(count = messages.len(), "Search rejected by RFC Editor");
        }
        SearchOutcome::NoMatches => tracing::info!("Search matched nothing"),
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::http::Response;
    use std::cell::RefCell;

    struct PageTransport {
        status: u16,
        body: &'static str,
        requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl PageTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for PageTransport {
        fn fetch(&self, url: &str, params: &[(&str, String)]) -> Result<Response> {
            self.requests.borrow_mut().push((
                url.to_string(),
                params
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            ));
            Ok(Response {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    #[test]
    fn test_search_sends_query_params() {
        let transport = PageTransport::new(200, "<html><body></body></html>");
        let query = QueryParams::new(0, "TCP").unwrap();

        let outcome = search(&transport, &SearchConfig::default(), &query).unwrap();
        assert_eq!(outcome, SearchOutcome::NoMatches);

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, crate::config::SEARCH_URL);
        assert!(requests[0]
            .1
            .contains(&("title".to_string(), "TCP".to_string())));
    }

    #[test]
    fn test_search_http_failure() {
        let transport = PageTransport::new(502, "Bad Gateway");
        let query = QueryParams::new(9293, "").unwrap();

        let err = search(&transport, &SearchConfig::default(), &query).unwrap_err();
        assert!(matches!(err, SearchError::HttpFailure { status: 502, .. }));
    }

    #[test]
    fn test_search_empty_body() {
        let transport = PageTransport::new(200, "");
        let query = QueryParams::new(9293, "").unwrap();

        let err = search(&transport, &SearchConfig::default(), &query).unwrap_err();
        assert!(matches!(err, SearchError::EmptyBody));
    }
}
