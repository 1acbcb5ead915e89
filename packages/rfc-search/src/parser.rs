//! Search results page parsing.
//!
//! The RFC Editor answers every search with an HTML page that holds one of:
//! - a `table.gridtable` with one row per matching RFC
//! - a `div.errors` container listing why the query was rejected
//! - neither, when the query matched nothing

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, SearchError};
use crate::types::{SearchOutcome, SpecRecord};

/// Number of data cells in a results table row.
const ROW_CELLS: usize = 7;

/// Fixed cell positions within a results table row.
mod cell {
    pub const FILES: usize = 1;
    pub const TITLE: usize = 2;
    pub const AUTHORS: usize = 3;
    pub const DATE: usize = 4;
    pub const MORE_INFO: usize = 5;
    pub const STATUS: usize = 6;
}

/// Results table of a successful search.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static RESULTS_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.gridtable").expect("valid selector"));

/// Container of the messages for a rejected query.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static ERRORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.errors").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static ROW: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static HEADER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static DATA_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid selector"));

#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static LIST_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("valid selector"));

/// Parse a search results page.
///
/// # Arguments
/// * `html` - Body of the search response
///
/// # Returns
/// * `SearchOutcome::Records` when the results table is present
/// * `SearchOutcome::RemoteValidationErrors` when the error container is present
/// * `SearchOutcome::NoMatches` otherwise
/// * `Err(SearchError::EmptyBody)` for an empty body
///
/// # Examples
/// ```
/// use rfc_search::parser::parse_search_results;
/// use rfc_search::types::SearchOutcome;
///
/// let html = "<html><body><p>Nothing here</p></body></html>";
/// assert_eq!(parse_search_results(html).unwrap(), SearchOutcome::NoMatches);
/// ```
pub fn parse_search_results(html: &str) -> Result<SearchOutcome> {
    if html.is_empty() {
        return Err(SearchError::EmptyBody);
    }

    let document = Html::parse_document(html);

    if let Some(table) = document.select(&RESULTS_TABLE).next() {
        let records: Vec<SpecRecord> = table
            .select(&ROW)
            .filter(|row| row.select(&HEADER_CELL).next().is_none())
            .filter_map(parse_row)
            .collect();

        tracing::debug!(count = records.len(), "Parsed results table");
        return Ok(SearchOutcome::Records(records));
    }

    if let Some(errors) = document.select(&ERRORS).next() {
        return Ok(SearchOutcome::RemoteValidationErrors(error_messages(errors)));
    }

    Ok(SearchOutcome::NoMatches)
}

/// Extract one record from a data row, or `None` if the row has another shape.
fn parse_row(row: ElementRef<'_>) -> Option<SpecRecord> {
    let cells: Vec<ElementRef<'_>> = row.select(&DATA_CELL).collect();
    if cells.len() != ROW_CELLS {
        tracing::debug!(cells = cells.len(), "Skipping row with unexpected cell count");
        return None;
    }

    let link = row.select(&ANCHOR).next()?;
    let link_text = element_text(link);

    let Some(id) = link_text
        .split_whitespace()
        .nth(1)
        .and_then(|token| token.parse::<u32>().ok())
    else {
        tracing::debug!(link = %link_text, "Skipping row without RFC number");
        return None;
    };

    let page_url = link.value().attr("href")?.to_string();

    Some(SpecRecord {
        id,
        files: file_links(cells[cell::FILES]),
        title: element_text(cells[cell::TITLE]),
        authors: element_text(cells[cell::AUTHORS]),
        date: element_text(cells[cell::DATE]),
        more_info: element_text(cells[cell::MORE_INFO]),
        status: element_text(cells[cell::STATUS]),
        page_url,
    })
}

/// Map each hyperlink in the files cell from its label to its target.
fn file_links(files_cell: ElementRef<'_>) -> BTreeMap<String, String> {
    files_cell
        .select(&ANCHOR)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            Some((element_text(anchor), href.to_string()))
        })
        .collect()
}

/// Collect the messages listed in the error container.
///
/// A container without list items yields its own text as the only message.
fn error_messages(errors: ElementRef<'_>) -> Vec<String> {
    let messages: Vec<String> = errors
        .select(&LIST_ITEM)
        .map(element_text)
        .filter(|message| !message.is_empty())
        .collect();

    if messages.is_empty() {
        let text = element_text(errors);
        if !text.is_empty() {
            return vec![text];
        }
    }

    messages
}

/// Concatenated text of an element, trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
