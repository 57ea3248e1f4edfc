//! Player count check.
//!
//! A formation must put exactly eleven players on the field.

use crate::formation::Formation;
use crate::rules::{Diagnostic, FormationRule, RuleId, Severity};

/// Players required on the field at the snap.
pub const REQUIRED_PLAYERS: usize = 11;

/// Requires exactly eleven players.
pub struct PlayerCountRule;

impl FormationRule for PlayerCountRule {
    fn id(&self) -> RuleId {
        RuleId::new("player-count")
    }

    fn name(&self) -> &str {
        "Player Count"
    }

    fn description(&self) -> &str {
        "Requires exactly 11 players in the formation"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, formation: &Formation) -> Vec<Diagnostic> {
        let count = formation.len();
        if count == REQUIRED_PLAYERS {
            return vec![];
        }

        let suggestion = if count < REQUIRED_PLAYERS {
            format!("Add {} player(s)", REQUIRED_PLAYERS - count)
        } else {
            format!("Remove {} player(s)", count - REQUIRED_PLAYERS)
        };

        vec![Diagnostic::new(
            self.id(),
            self.default_severity(),
            format!(
                "Must have exactly {} players, found {}",
                REQUIRED_PLAYERS, count
            ),
        )
        .with_suggestion(suggestion)]
    }
}
