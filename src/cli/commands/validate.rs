//! Validate command implementation.
//!
//! The `gridiron validate` command checks a formation against the ruleset
//! and prints a report.

use crate::cli::args::ValidateArgs;
use crate::config::RulesetConfig;
use crate::error::Result;
use crate::rules::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
use crate::ui::UserInterface;
use crate::validator::ValidationReport;

use super::dispatcher::{Command, CommandResult};
use super::input::{load_formation, report_missing};

/// The validate command implementation.
pub struct ValidateCommand {
    ruleset: RulesetConfig,
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(ruleset: RulesetConfig, args: ValidateArgs) -> Self {
        Self { ruleset, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ValidateArgs {
        &self.args
    }

    fn passes(&self, report: &ValidationReport) -> bool {
        report.valid && !(self.args.strict && !report.warnings.is_empty())
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(loaded) = load_formation(&self.args.input, &self.ruleset)? else {
            report_missing(ui);
            return Ok(CommandResult::failure(2));
        };

        let validator = self.ruleset.validator();
        let diagnostics = validator.diagnostics(&loaded.formation);
        let report = ValidationReport::from_diagnostics(&diagnostics);
        let passes = self.passes(&report);

        let mut output = Vec::new();
        match self.args.format {
            OutputFormat::Json => {
                JsonFormatter::new().format(&diagnostics, &mut output)?;
                ui.output(&String::from_utf8_lossy(&output));
            }
            OutputFormat::Human => {
                if ui.output_mode().shows_detail() {
                    ui.message(&format!(
                        "Checking {} ({} players, {} rules)",
                        loaded.source,
                        loaded.formation.len(),
                        validator.registry().len()
                    ));
                }

                HumanFormatter::new(ui.use_color()).format(&diagnostics, &mut output)?;
                if !output.is_empty() {
                    ui.output(&String::from_utf8_lossy(&output));
                }

                if passes {
                    ui.success(&format!("{} is a legal formation", loaded.source));
                } else if report.valid {
                    ui.error(&format!("{} has warnings (--strict)", loaded.source));
                } else {
                    ui.error(&format!("{} is not a legal formation", loaded.source));
                    ui.show_hint("Run 'gridiron fix' to apply automatic fixes");
                }
            }
        }

        if passes {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
