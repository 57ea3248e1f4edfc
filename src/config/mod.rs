//! Ruleset configuration loading, parsing, and validation.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use gridiron::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".gridiron.yml"), "line_flags: derive").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.line_flags, gridiron::config::LineFlagPolicy::Derive);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    find_config, find_project_root, load_config, load_config_file, parse_config,
    CONFIG_FILE_NAME,
};
pub use schema::{LineFlagPolicy, RoleLabels, RulesetConfig};
pub use validator::{validate, validate_config, ValidationError};
