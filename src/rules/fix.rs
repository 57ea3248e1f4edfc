//! Automatic formation fixes.
//!
//! [`FixEngine`] nudges an illegal formation toward a legal one:
//!
//! 1. If fewer than seven players are on the line, the backfield players
//!    nearest the line of scrimmage are moved up onto it.
//! 2. Every receiver on the line is made eligible if it stands on an end of
//!    the line, and ineligible otherwise.
//!
//! This is a heuristic, not a solver. It does not re-validate its output, it
//! leaves an ineligible lineman on the end of the line alone, and it never
//! clears eligibility on an interior non-receiver. Run the validator again
//! on the result.

use std::fmt;

use super::checks::line_count::MIN_ON_LINE;
use crate::field::FieldGeometry;
use crate::formation::Formation;

/// A single change made by the fix engine.
#[derive(Debug, Clone, PartialEq)]
pub enum FixAction {
    /// A backfield player was moved onto the line.
    PromoteToLine {
        player: String,
        /// The player's y before the move.
        from_y: f64,
        to_y: f64,
    },
    /// A receiver's eligibility was changed.
    SetEligibility { player: String, eligible: bool },
}

impl FixAction {
    /// The player the action touched.
    pub fn player(&self) -> &str {
        match self {
            FixAction::PromoteToLine { player, .. } => player,
            FixAction::SetEligibility { player, .. } => player,
        }
    }
}

impl fmt::Display for FixAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixAction::PromoteToLine {
                player,
                from_y,
                to_y,
            } => write!(f, "Move {} up to the line (y {} -> {})", player, from_y, to_y),
            FixAction::SetEligibility {
                player,
                eligible: true,
            } => write!(f, "Mark {} eligible", player),
            FixAction::SetEligibility {
                player,
                eligible: false,
            } => write!(f, "Mark {} ineligible", player),
        }
    }
}

/// Result of running the fix engine.
#[derive(Debug, Clone)]
pub struct FixResult {
    /// The corrected copy.
    pub formation: Formation,
    /// Changes made, in the order they were applied.
    pub actions: Vec<FixAction>,
}

impl FixResult {
    /// Whether anything was changed.
    pub fn changed(&self) -> bool {
        !self.actions.is_empty()
    }
}

/// Engine for applying automatic fixes.
#[derive(Debug, Clone, Default)]
pub struct FixEngine {
    field: FieldGeometry,
}

impl FixEngine {
    /// Create a new fix engine for the given field.
    pub fn new(field: FieldGeometry) -> Self {
        Self { field }
    }

    /// Produce a corrected copy of `formation`. The input is left untouched.
    pub fn fix(&self, formation: &Formation) -> FixResult {
        let mut fixed = formation.clone();
        let mut actions = self.promote_to_line(&mut fixed);
        actions.extend(self.reset_receiver_eligibility(&mut fixed));

        for action in &actions {
            tracing::debug!("Fix: {}", action);
        }

        FixResult {
            formation: fixed,
            actions,
        }
    }

    /// Preview fixes without applying them.
    pub fn preview_fixes(&self, actions: &[FixAction]) -> Vec<String> {
        actions.iter().map(ToString::to_string).collect()
    }

    fn promote_to_line(&self, formation: &mut Formation) -> Vec<FixAction> {
        let on_line = formation.on_line().count();
        if on_line >= MIN_ON_LINE {
            return vec![];
        }

        let mut candidates: Vec<(String, f64)> = formation
            .backfield()
            .map(|(id, p)| (id.to_string(), p.y))
            .collect();
        candidates.sort_by(|a, b| {
            self.field
                .distance_from_line(a.1)
                .total_cmp(&self.field.distance_from_line(b.1))
        });

        let mut actions = Vec::new();
        for (id, from_y) in candidates.into_iter().take(MIN_ON_LINE - on_line) {
            if let Some(player) = formation.get_mut(&id) {
                player.y = self.field.los_y;
                player.on_los = true;
            }
            actions.push(FixAction::PromoteToLine {
                player: id,
                from_y,
                to_y: self.field.los_y,
            });
        }
        actions
    }

    fn reset_receiver_eligibility(&self, formation: &mut Formation) -> Vec<FixAction> {
        let line: Vec<(String, bool, bool)> = {
            let sorted = formation.line_by_x();
            let last = sorted.len().saturating_sub(1);
            sorted
                .iter()
                .enumerate()
                .filter(|(_, (_, p))| p.role.is_receiver())
                .map(|(index, (id, p))| (id.to_string(), p.eligible, index == 0 || index == last))
                .collect()
        };

        let mut actions = Vec::new();
        for (id, was_eligible, is_end) in line {
            if was_eligible == is_end {
                continue;
            }
            if let Some(player) = formation.get_mut(&id) {
                player.eligible = is_end;
            }
            actions.push(FixAction::SetEligibility {
                player: id,
                eligible: is_end,
            });
        }
        actions
    }
}
