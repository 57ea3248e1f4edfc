//! Line balance advisory.
//!
//! Counts linemen either side of center and warns when one side has more
//! than one extra. An unbalanced line is legal, so this rule only warns.

use crate::field::DEFAULT_CENTER_X;
use crate::formation::Formation;
use crate::rules::{Diagnostic, FormationRule, RuleId, Severity};

/// Warns when the offensive line is lopsided.
pub struct LineBalanceRule {
    center_x: f64,
}

impl LineBalanceRule {
    pub fn new(center_x: f64) -> Self {
        Self { center_x }
    }
}

impl Default for LineBalanceRule {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER_X)
    }
}

impl FormationRule for LineBalanceRule {
    fn id(&self) -> RuleId {
        RuleId::new("line-balance")
    }

    fn name(&self) -> &str {
        "Line Balance"
    }

    fn description(&self) -> &str {
        "Warns when one side of center has more than one extra lineman"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, formation: &Formation) -> Vec<Diagnostic> {
        let linemen = formation.on_line().filter(|(_, p)| p.role.is_lineman());
        let (mut left, mut right) = (0usize, 0usize);
        for (_, player) in linemen {
            if player.x < self.center_x {
                left += 1;
            } else if player.x > self.center_x {
                right += 1;
            }
        }

        if left.abs_diff(right) <= 1 {
            return vec![];
        }

        vec![Diagnostic::new(
            self.id(),
            self.default_severity(),
            format!("Unbalanced line: {} linemen left, {} right", left, right),
        )]
    }
}
