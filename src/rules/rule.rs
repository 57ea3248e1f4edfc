//! Formation rule definitions.
//!
//! This module provides the core traits and types for defining rules:
//!
//! - [`FormationRule`] - The trait that all formation rules implement
//! - [`RuleId`] - Unique identifier for a rule
//! - [`Severity`] - Severity of a diagnostic (Warning, Error)
//! - [`RuleLevel`] - Configured level for a rule, including `off`

use serde::{Deserialize, Serialize};

use super::diagnostic::Diagnostic;
use crate::formation::Formation;

/// Unique identifier for a formation rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for diagnostics.
///
/// Errors are rule violations and make a formation illegal; warnings are
/// advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Advisory; the formation is still legal.
    Warning,
    /// Illegal alignment.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Configured level for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Error,
    Warning,
    /// Do not run the rule.
    Off,
}

impl RuleLevel {
    /// The severity diagnostics get at this level, or `None` when off.
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Error => Some(Severity::Error),
            RuleLevel::Warning => Some(Severity::Warning),
            RuleLevel::Off => None,
        }
    }
}

impl From<Severity> for RuleLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => RuleLevel::Warning,
            Severity::Error => RuleLevel::Error,
        }
    }
}

impl std::fmt::Display for RuleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleLevel::Error => write!(f, "error"),
            RuleLevel::Warning => write!(f, "warning"),
            RuleLevel::Off => write!(f, "off"),
        }
    }
}

/// A rule that checks one aspect of formation legality.
///
/// Rules are pure: they read a formation snapshot and return diagnostics,
/// never mutating the input and never failing.
pub trait FormationRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check the formation and return any diagnostics.
    fn check(&self, formation: &Formation) -> Vec<Diagnostic>;
}
