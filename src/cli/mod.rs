//! Command-line interface for gridiron.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CatalogArgs, CatalogCommands, CatalogListArgs, CatalogShowArgs, Cli, Commands,
    CompletionsArgs, FixArgs, FormationInput, MotionArgs, RulesArgs, ValidateArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
