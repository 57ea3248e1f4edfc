//! Formation legality rules.
//!
//! This module provides the pluggable rule engine the validator runs.
//!
//! # Overview
//!
//! The rule system consists of:
//!
//! - **Rules** - Individual legality checks ([`FormationRule`] trait)
//! - **Registry** - The ordered set of rules to run ([`RuleRegistry`])
//! - **Diagnostics** - Issue reports with severity, players and suggestions ([`Diagnostic`])
//! - **Fixes** - The auto-fix heuristic ([`FixEngine`])
//!
//! # Example
//!
//! ```
//! use gridiron::field::FieldGeometry;
//! use gridiron::rules::{RuleId, RuleRegistry, Severity};
//!
//! let registry = RuleRegistry::with_builtins(&FieldGeometry::default());
//!
//! assert!(registry.get(&RuleId::new("line-count")).is_some());
//! assert!(registry.get(&RuleId::new("nonexistent")).is_none());
//!
//! // Severity has ordering
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod checks;
pub mod diagnostic;
pub mod fix;
pub mod output;
pub mod registry;
pub mod rule;

pub use checks::{
    BackfieldCountRule, CoveredReceiverRule, EndOfLineEligibilityRule, LineBalanceRule,
    LineCountRule, PlayerCountRule,
};
pub use diagnostic::Diagnostic;
pub use fix::{FixAction, FixEngine, FixResult};
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
pub use registry::RuleRegistry;
pub use rule::{FormationRule, RuleId, RuleLevel, Severity};
