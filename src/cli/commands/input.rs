//! Resolving a formation from command-line input.
//!
//! Commands that check a formation accept either a file path or a catalog
//! id, and an optional left-for-right flip.

use std::path::PathBuf;

use crate::cli::args::FormationInput;
use crate::config::RulesetConfig;
use crate::error::Result;
use crate::formation::file::load_spec;
use crate::formation::{Catalog, FileFormat, Formation};
use crate::ui::UserInterface;

/// A formation read from a file or the catalog.
#[derive(Debug, Clone)]
pub struct LoadedFormation {
    pub formation: Formation,
    /// Format to write derived formations in.
    pub format: FileFormat,
    /// Path of the input file, if it came from one.
    pub path: Option<PathBuf>,
    /// Human label for the input: the file path or the catalog id.
    pub source: String,
}

/// Load the formation named by `input`, classified under `ruleset`.
///
/// Returns `Ok(None)` when neither a file nor a catalog id was given.
pub fn load_formation(
    input: &FormationInput,
    ruleset: &RulesetConfig,
) -> Result<Option<LoadedFormation>> {
    let mut loaded = if let Some(path) = &input.file {
        tracing::debug!("Reading formation from {}", path.display());
        let spec = load_spec(path)?;
        LoadedFormation {
            formation: ruleset.formation(&spec),
            format: FileFormat::from_path(path),
            path: Some(path.clone()),
            source: path.display().to_string(),
        }
    } else if let Some(id) = &input.formation {
        let catalog = Catalog::builtin()?;
        let entry = catalog.require(id)?;
        LoadedFormation {
            formation: ruleset.formation(&entry.spec()),
            format: FileFormat::Yaml,
            path: None,
            source: entry.id.clone(),
        }
    } else {
        return Ok(None);
    };

    if input.flip {
        loaded.formation = loaded.formation.mirrored(&ruleset.field);
    }

    Ok(Some(loaded))
}

/// Report a missing formation argument.
pub fn report_missing(ui: &mut dyn UserInterface) {
    ui.error("No formation given");
    ui.show_hint("Pass a formation file, or --formation ID for a catalog formation");
}
