//! Line of scrimmage count check.
//!
//! At least seven players must be on the line at the snap. The rule trusts
//! each player's `on_los` flag as given.

use crate::formation::Formation;
use crate::rules::{Diagnostic, FormationRule, RuleId, Severity};

/// Minimum number of players on the line of scrimmage.
pub const MIN_ON_LINE: usize = 7;

/// Requires at least seven players on the line.
pub struct LineCountRule;

impl FormationRule for LineCountRule {
    fn id(&self) -> RuleId {
        RuleId::new("line-count")
    }

    fn name(&self) -> &str {
        "Line Count"
    }

    fn description(&self) -> &str {
        "Requires at least 7 players on the line of scrimmage"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, formation: &Formation) -> Vec<Diagnostic> {
        let on_line = formation.on_line().count();
        if on_line >= MIN_ON_LINE {
            return vec![];
        }

        vec![Diagnostic::new(
            self.id(),
            self.default_severity(),
            format!(
                "Must have at least {} players on the line of scrimmage, found {}",
                MIN_ON_LINE, on_line
            ),
        )
        .with_suggestion(format!(
            "Move {} player(s) up to the line",
            MIN_ON_LINE - on_line
        ))]
    }
}
