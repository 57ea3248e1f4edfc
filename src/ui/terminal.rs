//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, GridironTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status lines and output go to stdout; errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: GridironTheme,
    color: bool,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, detecting color support.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_color(mode, should_use_colors())
    }

    /// Create a new terminal UI with colors forced on or off.
    pub fn with_color(mode: OutputMode, color: bool) -> Self {
        let theme = if color {
            GridironTheme::new()
        } else {
            GridironTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            color,
            mode,
        }
    }

    pub fn theme(&self) -> &GridironTheme {
        &self.theme
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn use_color(&self) -> bool {
        self.color
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn output(&mut self, text: &str) {
        if self.mode.shows_output() {
            write!(self.out, "{}", text).ok();
            if !text.ends_with('\n') {
                writeln!(self.out).ok();
            }
        }
    }
}
