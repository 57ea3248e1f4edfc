//! Human-readable output formatter.
//!
//! Formats diagnostics for terminal display with optional color support.

use console::Style;
use std::io::Write;

use super::ReportFormatter;
use crate::rules::{Diagnostic, Severity};

/// Formats validation output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn severity_prefix(&self, severity: Severity) -> String {
        let (label, style) = match severity {
            Severity::Warning => ("warning", Style::new().yellow().bold()),
            Severity::Error => ("error", Style::new().red().bold()),
        };
        if self.use_color {
            style.force_styling(true).apply_to(label).to_string()
        } else {
            label.to_string()
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, diagnostics: &[Diagnostic], writer: &mut W) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: error[rule-id]: message
            writeln!(
                writer,
                "{}[{}]: {}",
                self.severity_prefix(diag.severity),
                diag.rule_id,
                diag.message
            )?;

            if !diag.players.is_empty() {
                writeln!(writer, "   = players: {}", diag.players.join(", "))?;
            }

            if let Some(ref suggestion) = diag.suggestion {
                writeln!(writer, "   = help: {}", suggestion)?;
            }

            writeln!(writer)?;
        }

        let error_count = diagnostics.iter().filter(|d| d.is_error()).count();
        let warning_count = diagnostics.len() - error_count;

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
