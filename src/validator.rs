//! Formation validation.
//!
//! [`FormationValidator`] is the entry point for checking a formation. It
//! runs the rule registry, turns the diagnostics into the plain
//! `{valid, violations, warnings}` report the editor shows, and answers
//! auto-fix and pre-snap motion questions.
//!
//! # Example
//!
//! ```
//! use gridiron::field::FieldGeometry;
//! use gridiron::formation::{Formation, PlayerPosition, Role};
//! use gridiron::validator::FormationValidator;
//!
//! let validator = FormationValidator::new(FieldGeometry::default());
//! let formation = Formation::new()
//!     .with_player("C", PlayerPosition::new(600.0, 350.0, true, false, Role::Lineman));
//!
//! let report = validator.validate_formation(&formation);
//! assert!(!report.valid);
//! assert_eq!(report.violations[0], "Must have exactly 11 players, found 1");
//! ```

use serde::Serialize;
use std::time::Duration;

use crate::field::FieldGeometry;
use crate::formation::Formation;
use crate::rules::{Diagnostic, FixEngine, FixResult, RuleRegistry, Severity};

/// How long a player in motion must be set before the snap.
///
/// [`MotionPaths::must_set_before_snap`] refers to this dwell; no clock is
/// modelled.
pub const MIN_SET_DURATION: Duration = Duration::from_secs(1);

/// Pass/fail result of validating a formation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// True when there are no violations. Warnings do not affect this.
    pub valid: bool,
    pub violations: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Split diagnostics into violations and warnings, keeping their order.
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut violations = Vec::new();
        let mut warnings = Vec::new();
        for diagnostic in diagnostics {
            match diagnostic.severity {
                Severity::Error => violations.push(diagnostic.message.clone()),
                Severity::Warning => warnings.push(diagnostic.message.clone()),
            }
        }

        Self {
            valid: violations.is_empty(),
            violations,
            warnings,
        }
    }
}

/// Motion a player may make before the snap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MotionPaths {
    /// Parallel to the line of scrimmage.
    pub horizontal: bool,
    /// Toward the line at the snap.
    pub vertical: bool,
    /// The player must come to a stop for [`MIN_SET_DURATION`] before the snap.
    pub must_set_before_snap: bool,
}

/// Checks formations against the legality rules.
pub struct FormationValidator {
    field: FieldGeometry,
    registry: RuleRegistry,
}

impl FormationValidator {
    /// Create a validator running the built-in rules.
    pub fn new(field: FieldGeometry) -> Self {
        Self::with_registry(field, RuleRegistry::with_builtins(&field))
    }

    /// Create a validator running a custom rule registry.
    pub fn with_registry(field: FieldGeometry, registry: RuleRegistry) -> Self {
        Self { field, registry }
    }

    pub fn field(&self) -> &FieldGeometry {
        &self.field
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Run every rule and return the structured diagnostics.
    pub fn diagnostics(&self, formation: &Formation) -> Vec<Diagnostic> {
        self.registry.run(formation)
    }

    /// Check a formation.
    ///
    /// Never fails: an empty or nonsensical formation simply produces
    /// violations.
    pub fn validate_formation(&self, formation: &Formation) -> ValidationReport {
        let report = ValidationReport::from_diagnostics(&self.diagnostics(formation));
        tracing::debug!(
            "Validated {} player(s): {} violation(s), {} warning(s)",
            formation.len(),
            report.violations.len(),
            report.warnings.len()
        );
        report
    }

    /// Run the fix engine, keeping the list of changes.
    pub fn fix(&self, formation: &Formation) -> FixResult {
        FixEngine::new(self.field).fix(formation)
    }

    /// Return a corrected copy of `formation`.
    ///
    /// Best effort only; see [`FixEngine`]. Validate the result again if
    /// legality matters.
    pub fn auto_fix_formation(&self, formation: &Formation) -> Formation {
        self.fix(formation).formation
    }

    /// Whether a player may go in motion: off the line and eligible.
    ///
    /// Unknown players cannot motion.
    pub fn can_player_motion(&self, player_id: &str, formation: &Formation) -> bool {
        formation
            .get(player_id)
            .is_some_and(|p| !p.on_los && p.eligible)
    }

    /// Motion available to a player. All false when it cannot motion.
    pub fn valid_motion_paths(&self, player_id: &str, formation: &Formation) -> MotionPaths {
        if !self.can_player_motion(player_id, formation) {
            return MotionPaths::default();
        }

        MotionPaths {
            horizontal: true,
            vertical: false,
            must_set_before_snap: true,
        }
    }
}

impl Default for FormationValidator {
    fn default() -> Self {
        Self::new(FieldGeometry::default())
    }
}
