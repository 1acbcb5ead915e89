//! Presentation of search outcomes.
//!
//! A search ends in exactly one of four states:
//! - the query was rejected: every message becomes an error line
//! - nothing matched: a single warning line
//! - a single RFC matched: its plain text is fetched and written verbatim
//! - several RFCs matched (or a listing was requested): a summary table

use std::io::Write;

use crate::config::{NUMBER_COLUMN_WIDTH, TITLE_COLUMN_WIDTH, TITLE_MAX_CHARS};
use crate::error::{Result, SearchError};
use crate::http::{fetch_text, Transport};
use crate::status::StatusWriter;
use crate::types::{SearchOutcome, SpecRecord};

/// Warning shown when a search matched nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matching RFC specifications were found";

/// What was shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    /// The search page rejected the query.
    Rejected { messages: usize },
    /// Nothing matched.
    Empty,
    /// The full text of one RFC was written.
    Document { id: u32 },
    /// A summary table with this many rows was written.
    Table { rows: usize },
}

impl Presented {
    /// Whether the caller should report failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Present a search outcome.
///
/// # Arguments
/// * `outcome` - Parsed search results
/// * `always_list` - Show a table even for a single match
/// * `transport` - Used to download the document of a single match
/// * `out` - Receives the document text or the table
/// * `status` - Receives error and warning lines
pub fn present<T, W, S>(
    outcome: SearchOutcome,
    always_list: bool,
    transport: &T,
    out: &mut W,
    status: &S,
) -> Result<Presented>
where
    T: Transport + ?Sized,
    W: Write + ?Sized,
    S: StatusWriter + ?Sized,
{
    match outcome {
        SearchOutcome::RemoteValidationErrors(messages) => {
            for message in &messages {
                status.error(message);
            }
            Ok(Presented::Rejected {
                messages: messages.len(),
            })
        }
        SearchOutcome::NoMatches => {
            status.warn(NO_MATCHES_MESSAGE);
            Ok(Presented::Empty)
        }
        SearchOutcome::Records(records) => match records.as_slice() {
            [] => {
                status.warn(NO_MATCHES_MESSAGE);
                Ok(Presented::Empty)
            }
            [record] if !always_list => {
                let url = record
                    .text_url()
                    .ok_or(SearchError::NoTextDocument(record.id))?;

                tracing::info!(id = record.id, url, "Fetching RFC text");
                let text = fetch_text(transport, url, &[])?;
                out.write_all(text.as_bytes())?;
                out.flush()?;

                Ok(Presented::Document { id: record.id })
            }
            records => {
                out.write_all(render_table(records).as_bytes())?;
                out.flush()?;
                Ok(Presented::Table {
                    rows: records.len(),
                })
            }
        },
    }
}

/// Render the summary table of the given records.
///
/// # Examples
/// ```
/// use rfc_search::presenter::render_table;
///
/// let table = render_table(&[]);
/// let lines: Vec<&str> = table.lines().collect();
///
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0], format!("{:<9} {:<41} {}", "NUMBER", "TITLE", "DATE"));
/// assert_eq!(lines[1], format!("{:<9} {:<41} {}", "======", "=====", "===="));
/// ```
#[must_use]
pub fn render_table(records: &[SpecRecord]) -> String {
    let mut table = String::new();
    push_row(&mut table, "NUMBER", "TITLE", "DATE");
    push_row(&mut table, "======", "=====", "====");

    for record in records {
        push_row(
            &mut table,
            &record.id.to_string(),
            &truncate_title(&record.title),
            &record.date,
        );
    }

    table
}

fn push_row(table: &mut String, number: &str, title: &str, date: &str) {
    table.push_str(&format!(
        "{number:<nw$} {title:<tw$} {date}\n",
        nw = NUMBER_COLUMN_WIDTH,
        tw = TITLE_COLUMN_WIDTH,
    ));
}

/// Shorten a title to `TITLE_MAX_CHARS` characters followed by `...`.
///
/// # Examples
/// ```
/// use rfc_search::presenter::truncate_title;
///
/// assert_eq!(truncate_title("Short title"), "Short title");
/// assert_eq!(
///     truncate_title("Requirements for Internet Hosts - Communication Layers"),
///     "Requirements for Internet Hosts - C..."
/// );
/// ```
#[must_use]
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let head: String = title.chars().take(TITLE_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}
