//! Gridiron - Offensive formation legality checker.
//!
//! Gridiron checks American-football offensive formations against the
//! alignment rules: eleven players, at least seven on the line of
//! scrimmage, only the ends of the line eligible, and so on. It can nudge
//! an illegal formation toward a legal one and answer pre-snap motion
//! questions.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Ruleset loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`field`] - Field dimensions and the line of scrimmage
//! - [`formation`] - Formation snapshots, roles, files, and the catalog
//! - [`rules`] - Legality rules, diagnostics, fixes, and report formatting
//! - [`ui`] - Terminal output
//! - [`validator`] - The validation entry point
//!
//! # Example
//!
//! ```
//! use gridiron::formation::{Catalog, RoleClassifier};
//! use gridiron::validator::FormationValidator;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let formation = catalog
//!     .require("gun_trips_right_11")
//!     .unwrap()
//!     .formation(&RoleClassifier::default());
//!
//! let report = FormationValidator::default().validate_formation(&formation);
//! assert!(report.valid);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod field;
pub mod formation;
pub mod rules;
pub mod ui;
pub mod validator;

pub use error::{GridironError, Result};
