//! Reading and writing formation files.
//!
//! Files ending in `.json` are JSON; everything else is treated as YAML.

use std::fs;
use std::path::Path;

use super::FormationSpec;
use crate::error::{GridironError, Result};

/// Serialization format of a formation file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }

    /// Parse a formation from text in this format.
    ///
    /// Coordinates must be finite.
    pub fn parse(self, content: &str) -> std::result::Result<FormationSpec, String> {
        let spec: FormationSpec = match self {
            FileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            FileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        };
        check_finite(&spec)?;
        Ok(spec)
    }

    /// Render a formation as text in this format.
    pub fn render(self, spec: &FormationSpec) -> Result<String> {
        let text = match self {
            FileFormat::Json => serde_json::to_string_pretty(spec)
                .map(|mut s| {
                    s.push('\n');
                    s
                })
                .map_err(anyhow::Error::from)?,
            FileFormat::Yaml => serde_yaml::to_string(spec).map_err(anyhow::Error::from)?,
        };
        Ok(text)
    }
}

fn check_finite(spec: &FormationSpec) -> std::result::Result<(), String> {
    match spec
        .positions
        .iter()
        .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
    {
        Some((id, p)) => Err(format!(
            "player {} has a non-finite coordinate (x: {}, y: {})",
            id, p.x, p.y
        )),
        None => Ok(()),
    }
}

/// Load a formation file.
pub fn load_spec(path: &Path) -> Result<FormationSpec> {
    if !path.exists() {
        return Err(GridironError::FormationNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    FileFormat::from_path(path)
        .parse(&content)
        .map_err(|message| GridironError::FormationParseError {
            path: path.to_path_buf(),
            message,
        })
}

/// Write a formation file in the format implied by its extension.
pub fn write_spec(path: &Path, spec: &FormationSpec) -> Result<()> {
    let text = FileFormat::from_path(path).render(spec)?;
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TRIPS_JSON: &str = r#"{
  "name": "Trips",
  "positions": {
    "C": { "x": 600, "y": 350, "onLOS": true, "eligible": false },
    "QB": { "x": 600, "y": 420, "onLOS": false, "eligible": false }
  }
}"#;

    #[test]
    fn format_from_extension() {
        assert_eq!(FileFormat::from_path(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("a.yml")), FileFormat::Yaml);
        assert_eq!(FileFormat::from_path(Path::new("a")), FileFormat::Yaml);
    }

    #[test]
    fn loads_json_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trips.json");
        fs::write(&path, TRIPS_JSON).unwrap();

        let spec = load_spec(&path).unwrap();
        assert_eq!(spec.name.as_deref(), Some("Trips"));
        assert_eq!(spec.positions.len(), 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = load_spec(Path::new("/nonexistent/trips.yml"));
        assert!(matches!(
            result,
            Err(GridironError::FormationNotFound { .. })
        ));
    }

    #[test]
    fn bad_content_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.yml");
        fs::write(&path, "positions: [not, a, map]\n").unwrap();

        let result = load_spec(&path);
        assert!(matches!(
            result,
            Err(GridironError::FormationParseError { .. })
        ));
    }

    #[test]
    fn non_finite_coordinates_are_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nan.yml");
        fs::write(
            &path,
            "positions:\n  C: { x: .nan, y: 350, onLOS: true }\n  QB: { x: 600, y: .inf }\n",
        )
        .unwrap();

        match load_spec(&path) {
            Err(GridironError::FormationParseError { message, .. }) => {
                assert!(message.contains("player C has a non-finite coordinate"), "{}", message);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn write_then_load_keeps_positions() {
        let temp = TempDir::new().unwrap();
        let spec = FileFormat::Json.parse(TRIPS_JSON).unwrap();

        let yaml_path = temp.path().join("trips.yml");
        write_spec(&yaml_path, &spec).unwrap();
        let written = fs::read_to_string(&yaml_path).unwrap();
        assert!(written.contains("onLOS: true"));

        assert_eq!(load_spec(&yaml_path).unwrap(), spec);
    }
}
