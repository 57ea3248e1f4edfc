//! Ruleset file discovery and loading.
//!
//! A project's ruleset lives in `.gridiron.yml` at the project root. A path
//! given with `--config` replaces discovery entirely.

use crate::config::schema::RulesetConfig;
use crate::error::{GridironError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project ruleset.
pub const CONFIG_FILE_NAME: &str = ".gridiron.yml";

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. A `.gridiron.yml` file (primary indicator)
/// 2. A `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// The project ruleset path, if the file exists.
pub fn find_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    path.is_file().then_some(path)
}

/// Load a single ruleset file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RulesetConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GridironError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GridironError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a ruleset.
///
/// An empty document is the default ruleset.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RulesetConfig> {
    if content.trim().is_empty() {
        return Ok(RulesetConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GridironError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the ruleset for a project.
///
/// If `config_override` is provided, loads only that file. Otherwise uses
/// `.gridiron.yml` in the project root, or the default ruleset when there
/// is none.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<RulesetConfig> {
    let path = match config_override {
        Some(path) => path.to_path_buf(),
        None => match find_config(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!(
                    "No {} in {}, using default ruleset",
                    CONFIG_FILE_NAME,
                    project_root.display()
                );
                return Ok(RulesetConfig::default());
            }
        },
    };

    tracing::debug!("Loading ruleset from {}", path.display());
    load_config_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LineFlagPolicy;
    use tempfile::TempDir;

    #[test]
    fn find_config_in_project_root() {
        let temp = TempDir::new().unwrap();
        assert!(find_config(temp.path()).is_none());

        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert!(find_config(temp.path()).is_some());
    }

    #[test]
    fn find_project_root_finds_config_file() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("plays").join("red_zone");
        fs::create_dir_all(&subdir).unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_finds_git_dir() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("plays");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(temp.path().to_path_buf()));
    }

    #[test]
    fn find_project_root_prefers_nearest_config_over_git() {
        let temp = TempDir::new().unwrap();
        let subdir = temp.path().join("nested").join("project");
        fs::create_dir_all(&subdir).unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::write(subdir.join(CONFIG_FILE_NAME), "").unwrap();

        let root = find_project_root(&subdir);
        assert_eq!(root, Some(subdir));
    }

    #[test]
    fn load_config_without_file_is_default() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, RulesetConfig::default());
    }

    #[test]
    fn load_config_reads_project_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "line_flags: derive\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.line_flags, LineFlagPolicy::Derive);
    }

    #[test]
    fn override_replaces_discovery() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "line_flags: derive\n").unwrap();
        let other = temp.path().join("strict.yml");
        fs::write(&other, "rules:\n  line-balance: error\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.line_flags, LineFlagPolicy::Trust);
        assert!(config.rules.contains_key("line-balance"));
    }

    #[test]
    fn missing_override_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config(temp.path(), Some(&temp.path().join("nope.yml")));
        assert!(matches!(result, Err(GridironError::ConfigNotFound { .. })));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let result = parse_config("rules: [oops", Path::new("bad.yml"));
        assert!(matches!(result, Err(GridironError::ConfigParseError { .. })));
    }

    #[test]
    fn unknown_level_is_parse_error() {
        let result = parse_config("rules:\n  line-balance: loud\n", Path::new("bad.yml"));
        assert!(matches!(result, Err(GridironError::ConfigParseError { .. })));
    }
}
