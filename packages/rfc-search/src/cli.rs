//! Command-line interface for the RFC search.

use std::ffi::OsString;
use std::io;
use std::time::Duration;

use clap::error::{ContextKind, ErrorKind};
use clap::{ArgAction, CommandFactory, Parser};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{app_title, SearchConfig, APP_NAME};
use crate::error::{ArgError, Result};
use crate::http::HttpTransport;
use crate::presenter::{present, Presented};
use crate::query::QueryParams;
use crate::search::search;
use crate::status::StatusWriter;

/// RFC specification search application.
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(about = "RFC specification search application", long_about = None)]
#[command(before_help = app_title())]
#[command(override_usage = "rfc-search [-?hlv] [-k KEYWORD] [RFC_ID]")]
#[command(after_help = "Usage Examples:\n  rfc-search 9293\n  rfc-search -l -k TCP\n  rfc-search --keyword TCP")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// RFC specification ID number
    #[arg(value_name = "RFC_ID", value_parser = clap::value_parser!(u32).range(1..))]
    pub rfc_id: Option<u32>,

    /// Show this help message and exit
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::SetTrue)]
    pub help: bool,

    /// Enable verbose console output
    #[arg(short, long)]
    pub verbose: bool,

    /// Perform the RFC search using a keyword
    #[arg(short, long, value_name = "TERM")]
    pub keyword: Option<String>,

    /// Get a list of RFC specifications
    #[arg(short, long)]
    pub list: bool,
}

/// Validated command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print the help text and exit successfully.
    Help,
    /// Run a search.
    Search(SearchRequest),
}

/// A search requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: QueryParams,
    pub list: bool,
    pub verbose: bool,
}

/// Parse and validate command-line arguments.
///
/// The first item is the program name. No arguments at all, or `--help`,
/// yields [`Invocation::Help`].
pub fn parse_invocation<I, T>(args: I) -> std::result::Result<Invocation, ArgError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Ok(Invocation::Help);
    }

    let cli = Cli::try_parse_from(args).map_err(arg_error)?;
    if cli.help {
        return Ok(Invocation::Help);
    }

    if cli.keyword.as_deref() == Some("") {
        return Err(ArgError::InvalidValue {
            arg: "-k/--keyword".to_string(),
            value: "keyword cannot be empty".to_string(),
        });
    }

    let query = QueryParams::new(cli.rfc_id.unwrap_or(0), cli.keyword.as_deref().unwrap_or(""))?;

    Ok(Invocation::Search(SearchRequest {
        query,
        list: cli.list,
        verbose: cli.verbose,
    }))
}

/// Convert a clap parse failure into an argument error.
fn arg_error(err: clap::Error) -> ArgError {
    let context = |kind: ContextKind| err.get(kind).map(ToString::to_string);

    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::ValueValidation | ErrorKind::NoEquals => {
            ArgError::InvalidValue {
                arg: context(ContextKind::InvalidArg).unwrap_or_default(),
                value: context(ContextKind::InvalidValue).unwrap_or_default(),
            }
        }
        kind => ArgError::Unrecognized(
            context(ContextKind::InvalidArg)
                .unwrap_or_else(|| kind.as_str().unwrap_or("invalid arguments").to_string()),
        ),
    }
}

/// Full help text.
pub fn help() -> String {
    Cli::command().render_help().to_string()
}

/// Single usage line.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

/// Execute a search and present its outcome on stdout.
pub fn execute<S>(request: SearchRequest, status: &S) -> Result<Presented>
where
    S: StatusWriter + ?Sized,
{
    let config = SearchConfig::from_env()?;
    let transport = HttpTransport::new(config.timeout)?;
    let query = request
        .query
        .with_sort(config.sort_field, config.sort_direction);

    let subject = match (query.id(), query.title()) {
        (Some(id), _) => format!("RFC {id}"),
        (None, title) => format!("'{}'", title.unwrap_or_default()),
    };

    // Spinner is hidden automatically when stderr is not a terminal
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("{} {}", style("Searching").bold(), style(&subject).cyan()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let outcome = search(&transport, &config, &query);
    pb.finish_and_clear();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    present(outcome?, request.list, &transport, &mut out, status)
}
