//! Report output formatters.
//!
//! This module provides formatters for writing validation diagnostics in
//! human-readable or JSON form.

pub mod human;
pub mod json;

use super::Diagnostic;
use std::io::Write;

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting validation output.
pub trait ReportFormatter {
    /// Format diagnostics to the given writer.
    fn format<W: Write>(&self, diagnostics: &[Diagnostic], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
