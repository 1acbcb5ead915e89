//! CLI entry point for the RFC search.

use std::process::ExitCode;

use rfc_search::cli::{self, Invocation};
use rfc_search::status::{Console, StatusWriter};
use rfc_search::terminal;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    terminal::prepare(terminal::platform_terminal().as_ref());
    let console = Console::stderr();

    let request = match cli::parse_invocation(std::env::args_os()) {
        Ok(Invocation::Help) => {
            println!("{}", cli::help());
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Search(request)) => request,
        Err(e) => {
            println!("{}", cli::usage());
            console.error(&format!("{e}\n"));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(request.verbose);

    match cli::execute(request, &console) {
        Ok(presented) if presented.is_failure() => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing on stderr with WARN level by default (DEBUG with
/// `--verbose`), respecting RUST_LOG.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "rfc_search=debug,warn" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
