//! Fix command implementation.
//!
//! The `gridiron fix` command runs the automatic fixes on a formation,
//! writes or prints the corrected copy, then re-validates it.

use crate::cli::args::FixArgs;
use crate::config::RulesetConfig;
use crate::error::Result;
use crate::formation::file::write_spec;
use crate::rules::{FixEngine, HumanFormatter, ReportFormatter};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::input::{load_formation, report_missing};

/// The fix command implementation.
pub struct FixCommand {
    ruleset: RulesetConfig,
    args: FixArgs,
}

impl FixCommand {
    /// Create a new fix command.
    pub fn new(ruleset: RulesetConfig, args: FixArgs) -> Self {
        Self { ruleset, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &FixArgs {
        &self.args
    }
}

impl Command for FixCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(loaded) = load_formation(&self.args.input, &self.ruleset)? else {
            report_missing(ui);
            return Ok(CommandResult::failure(2));
        };

        let validator = self.ruleset.validator();
        let result = validator.fix(&loaded.formation);

        if result.changed() {
            ui.show_header(&format!("Fixes for {}", loaded.source));
            for line in FixEngine::new(self.ruleset.field).preview_fixes(&result.actions) {
                ui.message(&format!("  {}", line));
            }
        } else {
            ui.success("No fixes needed");
        }

        let spec = result.formation.to_spec();
        if self.args.dry_run {
            ui.message("Dry run: nothing written");
        } else if let Some(path) = &self.args.output {
            write_spec(path, &spec)?;
            ui.success(&format!("Wrote fixed formation to {}", path.display()));
        } else {
            ui.output(&loaded.format.render(&spec)?);
        }

        let remaining = validator.diagnostics(&result.formation);
        if remaining.iter().any(|d| d.is_error()) {
            let mut output = Vec::new();
            HumanFormatter::new(ui.use_color()).format(&remaining, &mut output)?;
            ui.warning("Problems remain after fixing:");
            ui.message(String::from_utf8_lossy(&output).trim_end());
            Ok(CommandResult::failure(1))
        } else {
            if result.changed() {
                ui.success("Fixed formation is legal");
            }
            Ok(CommandResult::success())
        }
    }
}
