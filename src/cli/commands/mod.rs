//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`gridiron validate`, `gridiron fix`)
//! - Shared ruleset loading
//! - Consistent global flag handling

pub mod catalog;
pub mod completions;
pub mod dispatcher;
pub mod fix;
pub mod input;
pub mod motion;
pub mod rules;
pub mod schema;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
