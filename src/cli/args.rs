//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::rules::OutputFormat;

/// Gridiron - Offensive formation legality checker.
#[derive(Debug, Parser)]
#[command(name = "gridiron")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to ruleset file (overrides default .gridiron.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a formation against the legality rules
    Validate(ValidateArgs),

    /// Nudge an illegal formation toward a legal one
    Fix(FixArgs),

    /// Show whether a player may go in motion
    Motion(MotionArgs),

    /// Browse the built-in formation catalog
    Catalog(CatalogArgs),

    /// List the rules and their configured levels
    Rules(RulesArgs),

    /// Print the JSON Schema of the formation file format
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where to read a formation from: a file or a catalog id.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FormationInput {
    /// Formation file (.json, .yml or .yaml)
    pub file: Option<PathBuf>,

    /// Use a formation from the built-in catalog
    #[arg(long, value_name = "ID", conflicts_with = "file")]
    pub formation: Option<String>,

    /// Mirror the formation left-for-right first
    #[arg(long)]
    pub flip: bool,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: FormationInput,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `fix` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FixArgs {
    #[command(flatten)]
    pub input: FormationInput,

    /// Write the fixed formation here instead of printing it
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Show the changes without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `motion` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MotionArgs {
    #[command(flatten)]
    pub input: FormationInput,

    /// Player id to check
    #[arg(long, value_name = "ID")]
    pub player: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `catalog` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

/// Catalog subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CatalogCommands {
    /// List catalog formations
    List(CatalogListArgs),

    /// Show one catalog formation
    Show(CatalogShowArgs),
}

/// Arguments for `catalog list`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatalogListArgs {
    /// Only show this category ("all" for every category)
    #[arg(long)]
    pub category: Option<String>,

    /// Match name, tags or personnel
    #[arg(long)]
    pub search: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `catalog show`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatalogShowArgs {
    /// Catalog formation id
    pub id: String,

    /// Mirror the formation left-for-right
    #[arg(long)]
    pub flip: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `rules` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RulesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
