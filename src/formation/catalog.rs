//! Built-in formation catalog embedded at compile time.
//!
//! Each `formations/*.yml` file holds one [`CatalogEntry`]. Entries carry the
//! same `positions` shape as formation files, plus the metadata the editor
//! uses to browse them (category, personnel, tags).

use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{Formation, FormationSpec, Personnel, PlayerSpec, RoleClassifier};
use crate::error::{GridironError, Result};

/// Embedded formations directory.
static FORMATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/formations");

/// A named formation in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    /// Personnel shorthand, e.g. `"11"`.
    pub personnel: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub positions: BTreeMap<String, PlayerSpec>,
}

impl CatalogEntry {
    /// The formation's wire shape.
    pub fn spec(&self) -> FormationSpec {
        FormationSpec {
            name: Some(self.name.clone()),
            positions: self.positions.clone(),
        }
    }

    /// Build a classified formation snapshot.
    pub fn formation(&self, classifier: &RoleClassifier) -> Formation {
        Formation::from_spec(&self.spec(), classifier)
    }

    /// Parsed personnel grouping, if the shorthand is well formed.
    pub fn personnel_group(&self) -> Option<Personnel> {
        Personnel::parse(&self.personnel)
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
            || self.personnel.contains(needle)
    }
}

/// Collection of named formations keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl Catalog {
    /// Load the catalog shipped with gridiron.
    pub fn builtin() -> Result<Self> {
        let mut entries = Vec::new();
        for file in FORMATIONS_DIR.files() {
            let is_yaml = file
                .path()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml");
            if !is_yaml {
                continue;
            }

            let content =
                file.contents_utf8()
                    .ok_or_else(|| GridironError::FormationParseError {
                        path: file.path().to_path_buf(),
                        message: "Invalid UTF-8".to_string(),
                    })?;
            let entry: CatalogEntry =
                serde_yaml::from_str(content).map_err(|e| GridironError::FormationParseError {
                    path: file.path().to_path_buf(),
                    message: e.to_string(),
                })?;
            entries.push(entry);
        }

        tracing::debug!("Loaded {} built-in formations", entries.len());
        Ok(Self::from_entries(entries))
    }

    /// Build a catalog from entries; later entries replace earlier ones with the same id.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.id.clone(), e)).collect(),
        }
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    /// Look up an entry by id, failing with [`GridironError::UnknownFormation`].
    pub fn require(&self, id: &str) -> Result<&CatalogEntry> {
        self.get(id).ok_or_else(|| GridironError::UnknownFormation { id: id.to_string() })
    }

    /// All entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.entries
            .values()
            .map(|e| e.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Filter by category and free-text search.
    ///
    /// A category of `None` or `"all"` matches every entry. The search text is
    /// matched case-insensitively against name, tags and personnel.
    pub fn search(&self, category: Option<&str>, text: Option<&str>) -> Vec<&CatalogEntry> {
        let category = category.filter(|c| !c.eq_ignore_ascii_case("all"));
        let needle = text.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty());

        self.entries
            .values()
            .filter(|e| category.is_none_or(|c| e.category.eq_ignore_ascii_case(c)))
            .filter(|e| needle.as_deref().is_none_or(|n| e.matches(n)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::Role;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 6);
        assert!(catalog.get("gun_trips_right_11").is_some());
    }

    #[test]
    fn every_builtin_has_eleven_players() {
        let catalog = Catalog::builtin().unwrap();
        for entry in catalog.iter() {
            assert_eq!(entry.positions.len(), 11, "{}", entry.id);
        }
    }

    #[test]
    fn every_builtin_personnel_parses() {
        let catalog = Catalog::builtin().unwrap();
        for entry in catalog.iter() {
            assert!(entry.personnel_group().is_some(), "{}", entry.id);
        }
    }

    #[test]
    fn categories_are_sorted_and_distinct() {
        let catalog = Catalog::builtin().unwrap();
        let categories = catalog.categories();
        assert!(categories.contains(&"shotgun"));
        let mut sorted = categories.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories, sorted);
    }

    #[test]
    fn search_by_category() {
        let catalog = Catalog::builtin().unwrap();
        let shotgun = catalog.search(Some("shotgun"), None);
        assert!(!shotgun.is_empty());
        assert!(shotgun.iter().all(|e| e.category == "shotgun"));

        let all = catalog.search(Some("all"), None);
        assert_eq!(all.len(), catalog.len());
    }

    #[test]
    fn search_by_text_matches_name_tags_and_personnel() {
        let catalog = Catalog::builtin().unwrap();

        let by_name = catalog.search(None, Some("TRIPS"));
        assert!(by_name.iter().any(|e| e.id == "gun_trips_right_11"));

        let by_tag = catalog.search(None, Some("play-action"));
        assert!(by_tag.iter().any(|e| e.id == "i_form_pro_21"));

        let by_personnel = catalog.search(None, Some("21"));
        assert!(by_personnel.iter().all(|e| e.personnel == "21"
            || e.name.contains("21")
            || e.tags.iter().any(|t| t.contains("21"))));

        assert!(catalog.search(None, Some("wishbone")).is_empty());
    }

    #[test]
    fn entry_builds_classified_formation() {
        let catalog = Catalog::builtin().unwrap();
        let formation = catalog
            .get("i_form_pro_21")
            .unwrap()
            .formation(&RoleClassifier::default());

        assert_eq!(formation.name(), Some("I-Form Pro"));
        assert_eq!(formation.get("FB").unwrap().role, Role::Backfield);
        assert_eq!(formation.get("Y").unwrap().role, Role::Receiver);
    }

    #[test]
    fn require_unknown_id_errors() {
        let catalog = Catalog::builtin().unwrap();
        assert!(matches!(
            catalog.require("wishbone"),
            Err(GridironError::UnknownFormation { .. })
        ));
    }
}
