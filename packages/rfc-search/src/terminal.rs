//! Terminal preparation before any output is written.
//!
//! Only the binary uses this module; the search pipeline never depends on it.

use console::Term;

use crate::config::app_title;

/// Platform-specific terminal setup.
pub trait TerminalCapability {
    /// Make sure ANSI escape sequences are interpreted.
    ///
    /// Returns `false` when the terminal cannot show styled output.
    fn enable_ansi(&self) -> bool;

    /// Set the window title of the terminal attached to standard output.
    fn set_title(&self, title: &str) {
        let term = Term::stdout();
        if term.is_term() {
            term.set_title(title);
        }
    }
}

/// Terminal that understands ANSI escape sequences natively.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnsiTerminal;

impl TerminalCapability for AnsiTerminal {
    fn enable_ansi(&self) -> bool {
        true
    }
}

/// Windows console, which needs virtual terminal processing switched on.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsConsole;

#[cfg(windows)]
impl TerminalCapability for WindowsConsole {
    fn enable_ansi(&self) -> bool {
        // Querying color support enables virtual terminal processing.
        Term::stdout().features().colors_supported()
            && Term::stderr().features().colors_supported()
    }
}

/// Terminal capability of the current platform.
pub fn platform_terminal() -> Box<dyn TerminalCapability> {
    #[cfg(windows)]
    {
        Box::new(WindowsConsole)
    }
    #[cfg(not(windows))]
    {
        Box::new(AnsiTerminal)
    }
}

/// Prepare the terminal: enable ANSI processing (or disable styling when that
/// fails) and set the window title.
pub fn prepare(terminal: &dyn TerminalCapability) {
    if !terminal.enable_ansi() {
        tracing::debug!("ANSI sequences unavailable, disabling colors");
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
        return;
    }

    terminal.set_title(&app_title());
}
