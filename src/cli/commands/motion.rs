//! Motion command implementation.
//!
//! The `gridiron motion` command answers whether a player may go in
//! pre-snap motion, and which way.

use serde::Serialize;

use crate::cli::args::MotionArgs;
use crate::config::RulesetConfig;
use crate::error::{GridironError, Result};
use crate::formation::PlayerPosition;
use crate::ui::UserInterface;
use crate::validator::{MotionPaths, MIN_SET_DURATION};

use super::dispatcher::{Command, CommandResult};
use super::input::{load_formation, report_missing};

/// The motion command implementation.
pub struct MotionCommand {
    ruleset: RulesetConfig,
    args: MotionArgs,
}

#[derive(Serialize)]
struct MotionOutput<'a> {
    player: &'a str,
    can_motion: bool,
    paths: MotionPaths,
    set_seconds: f64,
}

impl MotionCommand {
    /// Create a new motion command.
    pub fn new(ruleset: RulesetConfig, args: MotionArgs) -> Self {
        Self { ruleset, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &MotionArgs {
        &self.args
    }

    fn reason(player: &PlayerPosition) -> &'static str {
        if player.on_los {
            "players on the line of scrimmage must stay set"
        } else {
            "only eligible receivers may go in motion"
        }
    }
}

impl Command for MotionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(loaded) = load_formation(&self.args.input, &self.ruleset)? else {
            report_missing(ui);
            return Ok(CommandResult::failure(2));
        };

        let id = self.args.player.as_str();
        let player = loaded
            .formation
            .get(id)
            .ok_or_else(|| GridironError::UnknownPlayer {
                player: id.to_string(),
            })?;

        let validator = self.ruleset.validator();
        let can_motion = validator.can_player_motion(id, &loaded.formation);
        let paths = validator.valid_motion_paths(id, &loaded.formation);

        if self.args.json {
            let output = MotionOutput {
                player: id,
                can_motion,
                paths,
                set_seconds: MIN_SET_DURATION.as_secs_f64(),
            };
            let json = serde_json::to_string_pretty(&output).map_err(anyhow::Error::from)?;
            ui.output(&json);
        } else if can_motion {
            ui.success(&format!("{} can go in motion", id));
            let yes_no = |allowed: bool| if allowed { "yes" } else { "no" };
            ui.message(&format!("  Parallel to the line: {}", yes_no(paths.horizontal)));
            ui.message(&format!("  Toward the line:      {}", yes_no(paths.vertical)));
            if paths.must_set_before_snap {
                ui.show_hint(&format!(
                    "Must be set for {}s before the snap",
                    MIN_SET_DURATION.as_secs()
                ));
            }
        } else {
            ui.warning(&format!("{} cannot go in motion: {}", id, Self::reason(player)));
        }

        if can_motion {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
