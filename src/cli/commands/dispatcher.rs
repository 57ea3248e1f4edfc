//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CatalogCommands, Cli, Commands};
use crate::config::{load_config, validate, RulesetConfig};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            config_path: None,
        }
    }

    /// Use an explicit ruleset file instead of discovering `.gridiron.yml`.
    pub fn with_config(mut self, config_path: Option<PathBuf>) -> Self {
        self.config_path = config_path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate the ruleset for this project.
    pub fn load_ruleset(&self) -> Result<RulesetConfig> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        validate(&config)?;
        Ok(config)
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Validate(args)) => {
                let cmd = super::validate::ValidateCommand::new(self.load_ruleset()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Fix(args)) => {
                let cmd = super::fix::FixCommand::new(self.load_ruleset()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Motion(args)) => {
                let cmd = super::motion::MotionCommand::new(self.load_ruleset()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Catalog(args)) => match &args.command {
                CatalogCommands::List(list) => {
                    let cmd = super::catalog::CatalogListCommand::new(
                        self.load_ruleset()?,
                        list.clone(),
                    );
                    cmd.execute(ui)
                }
                CatalogCommands::Show(show) => {
                    let cmd = super::catalog::CatalogShowCommand::new(
                        self.load_ruleset()?,
                        show.clone(),
                    );
                    cmd.execute(ui)
                }
            },
            Some(Commands::Rules(args)) => {
                let cmd = super::rules::RulesCommand::new(self.load_ruleset()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand::new().execute(ui),
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                ui.error("No command given");
                ui.show_hint("Run 'gridiron --help' to see the available commands");
                Ok(CommandResult::failure(2))
            }
        }
    }
}
