//! JSON output formatter.
//!
//! Formats validation results as machine-readable JSON for tooling
//! integration. The top-level `valid`, `violations` and `warnings` keys carry
//! the same plain messages the editor displays.

use serde::Serialize;
use std::io::Write;

use super::ReportFormatter;
use crate::rules::{Diagnostic, Severity};

/// Formats validation output as JSON.
#[derive(Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    valid: bool,
    violations: Vec<&'a str>,
    warnings: Vec<&'a str>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    rule_id: &'a str,
    severity: String,
    message: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    players: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    errors: usize,
    warnings: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, diagnostics: &[Diagnostic], writer: &mut W) -> std::io::Result<()> {
        let messages = |severity: Severity| -> Vec<&str> {
            diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .map(|d| d.message.as_str())
                .collect()
        };
        let violations = messages(Severity::Error);
        let warnings = messages(Severity::Warning);

        let output = JsonOutput {
            valid: violations.is_empty(),
            summary: JsonSummary {
                total: diagnostics.len(),
                errors: violations.len(),
                warnings: warnings.len(),
            },
            violations,
            warnings,
            diagnostics: diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    rule_id: d.rule_id.as_str(),
                    severity: d.severity.to_string(),
                    message: &d.message,
                    players: d.players.iter().map(String::as_str).collect(),
                    suggestion: d.suggestion.as_deref(),
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
