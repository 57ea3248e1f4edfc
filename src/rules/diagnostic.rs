//! Rule diagnostics.
//!
//! This module provides the [`Diagnostic`] type for representing problems
//! found in a formation, with the ids of the players involved so the
//! message stays actionable.

use super::rule::{RuleId, Severity};

/// A diagnostic message produced by a formation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Players the diagnostic is about.
    pub players: Vec<String>,
    /// Optional suggestion for fixing the issue.
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            players: vec![],
            suggestion: None,
        }
    }

    /// Attach an offending player.
    pub fn with_player(mut self, player: impl Into<String>) -> Self {
        self.players.push(player.into());
        self
    }

    /// Add a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_creation() {
        let diag = Diagnostic::new(RuleId::new("test-rule"), Severity::Error, "Test message");

        assert_eq!(diag.rule_id, RuleId::new("test-rule"));
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.message, "Test message");
        assert!(diag.suggestion.is_none());
        assert!(diag.players.is_empty());
        assert!(diag.is_error());
    }

    #[test]
    fn diagnostic_builder_pattern() {
        let diag = Diagnostic::new(
            RuleId::new("covered-receiver"),
            Severity::Error,
            "Y is covered and ineligible",
        )
        .with_player("Y")
        .with_suggestion("Move Y off the line");

        assert_eq!(diag.players, vec!["Y".to_string()]);
        assert_eq!(diag.suggestion.as_deref(), Some("Move Y off the line"));
    }

    #[test]
    fn warning_is_not_error() {
        let diag = Diagnostic::new(RuleId::new("line-balance"), Severity::Warning, "w");
        assert!(!diag.is_error());
    }
}
