//! Status lines written to standard error.

use console::{style, StyledObject, Term};

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warn,
}

impl Level {
    /// Symbol printed in front of the message.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Error => "[x]",
            Self::Warn => "[!]",
        }
    }

    fn styled_symbol(&self) -> StyledObject<&'static str> {
        match self {
            Self::Error => style(self.symbol()).red().bold().for_stderr(),
            Self::Warn => style(self.symbol()).yellow().bold().for_stderr(),
        }
    }
}

/// Sink for user-facing error and warning lines.
pub trait StatusWriter {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Status writer for the process's standard error stream.
#[derive(Debug, Clone)]
pub struct Console {
    term: Term,
}

impl Console {
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn write(&self, level: Level, message: &str) {
        let line = format!("{} {message}", level.styled_symbol());
        if let Err(e) = self.term.write_line(&line) {
            tracing::debug!(error = %e, "Failed to write status line");
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stderr()
    }
}

impl StatusWriter for Console {
    fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }

    fn warn(&self, message: &str) {
        self.write(Level::Warn, message);
    }
}
