//! HTTP transport tests against a local mock of the RFC Editor.
//!
//! The transport is blocking, so the mock server lives on a tokio runtime
//! owned by each test while requests are sent from the test thread.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::time::Duration;

use pretty_assertions::assert_eq;
use rfc_search::config::SearchConfig;
use rfc_search::error::SearchError;
use rfc_search::http::{fetch_text, HttpTransport, Transport};
use rfc_search::presenter::{present, Presented};
use rfc_search::query::QueryParams;
use rfc_search::search::search;
use rfc_search::status::StatusWriter;
use rfc_search::types::SearchOutcome;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/search/rfc_search_detail.php";

fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("search")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn transport() -> HttpTransport {
    HttpTransport::new(Duration::from_secs(5)).unwrap()
}

fn config_for(server: &MockServer) -> SearchConfig {
    SearchConfig {
        search_url: format!("{}{SEARCH_PATH}", server.uri()),
        ..SearchConfig::default()
    }
}

/// Replace the production document links with links to the mock server.
fn rebase_links(html: &str, server: &MockServer) -> String {
    html.replace("https://www.rfc-editor.org", &server.uri())
}

#[derive(Default)]
struct RecordingStatus {
    errors: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl StatusWriter for RecordingStatus {
    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}

#[test]
fn test_search_sends_query_parameters() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("title", "TCP"))
            .and(query_param("rfc", ""))
            .and(query_param("page", "All"))
            .and(query_param("sortkey", "Number"))
            .and(query_param("sorting", "ASC"))
            .and(query_param("pubstatus[]", "Any"))
            .and(query_param("pub_date_type", "range"))
            .and(query_param("from_year", "1968"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(load_fixture("three_results.html")),
            )
            .expect(1)
            .mount(&server),
    );

    let query = QueryParams::new(0, "TCP").unwrap();
    let outcome = search(&transport(), &config_for(&server), &query).unwrap();

    let SearchOutcome::Records(records) = &outcome else {
        panic!("expected records, got {outcome:?}");
    };
    assert_eq!(records.len(), 3);

    rt.block_on(server.verify());
}

#[test]
fn test_error_page_is_remote_validation_errors() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("errors.html")))
            .mount(&server),
    );

    let query = QueryParams::new(0, "TCP").unwrap();
    let outcome = search(&transport(), &config_for(&server), &query).unwrap();

    assert!(matches!(
        outcome,
        SearchOutcome::RemoteValidationErrors(messages) if messages.len() == 2
    ));
}

#[test]
fn test_non_success_status_is_http_failure() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server),
    );

    let url = format!("{}/rfc/rfc99999.txt", server.uri());
    let err = fetch_text(&transport(), &url, &[]).unwrap_err();

    match err {
        SearchError::HttpFailure { status, url: failed } => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("expected HttpFailure, got {other:?}"),
    }
}

#[test]
fn test_slow_server_is_transport_error() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("too late")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server),
    );

    let transport = HttpTransport::new(Duration::from_millis(200)).unwrap();
    let err = transport.fetch(&server.uri(), &[]).unwrap_err();

    assert!(matches!(err, SearchError::Transport(_)));
}

#[test]
fn test_document_request_has_no_query_string() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/rfc/rfc793.txt"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("TRANSMISSION CONTROL PROTOCOL\n"),
            )
            .mount(&server),
    );

    let url = format!("{}/rfc/rfc793.txt", server.uri());
    let body = fetch_text(&transport(), &url, &[]).unwrap();
    assert_eq!(body, "TRANSMISSION CONTROL PROTOCOL\n");

    let requests = rt.block_on(server.received_requests()).unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[test]
fn test_single_match_downloads_document() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    let page = rebase_links(&load_fixture("three_results.html"), &server);
    // Keep only the RFC 9293 row
    let start = page.find("<tr>\n      <td><a href=").unwrap();
    let end = page.rfind("<tr>\n      <td><a href=").unwrap();
    let single = format!("{}{}", &page[..start], &page[end..]);

    rt.block_on(
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("rfc", "9293"))
            .respond_with(ResponseTemplate::new(200).set_body_string(single))
            .mount(&server),
    );
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/rfc/rfc9293.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("RFC 9293 plain text\n"))
            .expect(1)
            .mount(&server),
    );

    let transport = transport();
    let status = RecordingStatus::default();
    let mut out = Vec::new();

    let query = QueryParams::new(9293, "").unwrap();
    let outcome = search(&transport, &config_for(&server), &query).unwrap();
    let presented = present(outcome, false, &transport, &mut out, &status).unwrap();

    assert_eq!(presented, Presented::Document { id: 9293 });
    assert_eq!(String::from_utf8(out).unwrap(), "RFC 9293 plain text\n");
    assert!(status.errors.borrow().is_empty());
    assert!(status.warnings.borrow().is_empty());

    rt.block_on(server.verify());
}

#[test]
fn test_listing_renders_table_without_downloads() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());

    rt.block_on(
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(load_fixture("three_results.html")),
            )
            .expect(1)
            .mount(&server),
    );

    let transport = transport();
    let status = RecordingStatus::default();
    let mut out = Vec::new();

    let query = QueryParams::new(0, "Transmission").unwrap();
    let outcome = search(&transport, &config_for(&server), &query).unwrap();
    let presented = present(outcome, true, &transport, &mut out, &status).unwrap();

    assert_eq!(presented, Presented::Table { rows: 3 });

    let table = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("NUMBER"));
    assert!(lines[3].starts_with("1122      Requirements for Internet Hosts - C..."));
    assert!(lines[4].ends_with("August 2022"));

    rt.block_on(server.verify());
}
