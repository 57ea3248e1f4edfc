//! Backfield count check.
//!
//! No more than four players may line up off the line of scrimmage.

use crate::formation::Formation;
use crate::rules::{Diagnostic, FormationRule, RuleId, Severity};

/// Maximum number of players off the line.
pub const MAX_BACKFIELD: usize = 4;

/// Limits the backfield to four players.
pub struct BackfieldCountRule;

impl FormationRule for BackfieldCountRule {
    fn id(&self) -> RuleId {
        RuleId::new("backfield-count")
    }

    fn name(&self) -> &str {
        "Backfield Count"
    }

    fn description(&self) -> &str {
        "Allows at most 4 players off the line of scrimmage"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, formation: &Formation) -> Vec<Diagnostic> {
        let backfield: Vec<&str> = formation.backfield().map(|(id, _)| id).collect();
        if backfield.len() <= MAX_BACKFIELD {
            return vec![];
        }

        let mut diagnostic = Diagnostic::new(
            self.id(),
            self.default_severity(),
            format!(
                "Cannot have more than {} players in the backfield, found {}",
                MAX_BACKFIELD,
                backfield.len()
            ),
        )
        .with_suggestion(format!(
            "Move {} player(s) up to the line",
            backfield.len() - MAX_BACKFIELD
        ));
        for id in backfield {
            diagnostic = diagnostic.with_player(id);
        }

        vec![diagnostic]
    }
}
