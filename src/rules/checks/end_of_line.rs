//! End-of-line eligibility check.
//!
//! Of the players on the line, only the leftmost and rightmost may be
//! eligible receivers. A lineman who ends up on the end of the line has to
//! report as eligible.

use crate::formation::Formation;
use crate::rules::{Diagnostic, FormationRule, RuleId, Severity};

/// Checks eligibility against position along the line.
pub struct EndOfLineEligibilityRule;

impl FormationRule for EndOfLineEligibilityRule {
    fn id(&self) -> RuleId {
        RuleId::new("end-of-line-eligibility")
    }

    fn name(&self) -> &str {
        "End of Line Eligibility"
    }

    fn description(&self) -> &str {
        "Only the players at either end of the line may be eligible receivers"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, formation: &Formation) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let line = formation.line_by_x();
        let last = line.len().saturating_sub(1);

        for (index, (id, player)) in line.iter().enumerate() {
            let is_end = index == 0 || index == last;

            if player.eligible && !is_end {
                diagnostics.push(
                    Diagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!(
                            "{} is an eligible receiver but not on the end of the line (covered)",
                            id
                        ),
                    )
                    .with_player(*id)
                    .with_suggestion(format!(
                        "Mark {} ineligible or move them off the line",
                        id
                    )),
                );
            }

            if !player.eligible && is_end && player.role.is_lineman() {
                diagnostics.push(
                    Diagnostic::new(
                        self.id(),
                        self.default_severity(),
                        format!(
                            "{} is on the end of the line and must be eligible or report as eligible",
                            id
                        ),
                    )
                    .with_player(*id)
                    .with_suggestion(format!("Report {} as eligible", id)),
                );
            }
        }

        diagnostics
    }
}
