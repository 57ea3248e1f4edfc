//! Covered receiver check.
//!
//! Walking out from the center, the last on-line player on each side is the
//! end of the line on that side. A receiver standing there must be marked
//! eligible.

use crate::field::DEFAULT_CENTER_X;
use crate::formation::{Formation, PlayerPosition};
use crate::rules::{Diagnostic, FormationRule, RuleId, Severity};

/// Flags receivers on the end of the line that are not eligible.
pub struct CoveredReceiverRule {
    center_x: f64,
}

impl CoveredReceiverRule {
    /// Create the rule for a field whose center sits at `center_x`.
    pub fn new(center_x: f64) -> Self {
        Self { center_x }
    }

    /// Outermost on-line players strictly left and strictly right of center.
    ///
    /// Players sharing the outermost x resolve to the first in id order on
    /// both sides.
    fn ends<'a>(
        &self,
        formation: &'a Formation,
    ) -> (
        Option<(&'a str, &'a PlayerPosition)>,
        Option<(&'a str, &'a PlayerPosition)>,
    ) {
        let line = formation.line_by_x();
        let left = line.iter().find(|(_, p)| p.x < self.center_x).copied();
        let right = line
            .iter()
            .filter(|(_, p)| p.x > self.center_x)
            .map(|(_, p)| p.x)
            .max_by(f64::total_cmp)
            .and_then(|max_x| line.iter().find(|(_, p)| p.x == max_x))
            .copied();
        (left, right)
    }
}

impl Default for CoveredReceiverRule {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER_X)
    }
}

impl FormationRule for CoveredReceiverRule {
    fn id(&self) -> RuleId {
        RuleId::new("covered-receiver")
    }

    fn name(&self) -> &str {
        "Covered Receiver"
    }

    fn description(&self) -> &str {
        "A receiver on the end of the line must be eligible"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, formation: &Formation) -> Vec<Diagnostic> {
        let (left, right) = self.ends(formation);

        [left, right]
            .into_iter()
            .flatten()
            .filter(|(_, p)| p.role.is_receiver() && !p.eligible)
            .map(|(id, _)| {
                Diagnostic::new(
                    self.id(),
                    self.default_severity(),
                    format!("{} is covered and ineligible", id),
                )
                .with_player(id)
                .with_suggestion(format!("Mark {} eligible", id))
            })
            .collect()
    }
}
