//! Error types for gridiron operations.
//!
//! This module defines [`GridironError`], the error type used by the
//! command-line shell and the file/config loaders, and a [`Result`] type
//! alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Formation legality problems are never errors: the validator reports
//!   them as diagnostics and always returns a structured report
//! - Use `GridironError` for problems reading inputs (files, config, catalog ids)
//! - Use `anyhow::Error` (via `GridironError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gridiron operations.
#[derive(Debug, Error)]
pub enum GridironError {
    /// Formation file not found at the given location.
    #[error("Formation file not found: {path}")]
    FormationNotFound { path: PathBuf },

    /// Failed to parse a formation file.
    #[error("Failed to parse formation at {path}: {message}")]
    FormationParseError { path: PathBuf, message: String },

    /// Ruleset configuration file not found at the given location.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a ruleset configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Ruleset configuration is structurally valid YAML but semantically wrong.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Requested catalog formation does not exist.
    #[error("Unknown formation: {id}")]
    UnknownFormation { id: String },

    /// Requested player is not part of the formation.
    #[error("Unknown player '{player}' in formation")]
    UnknownPlayer { player: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gridiron operations.
pub type Result<T> = std::result::Result<T, GridironError>;
