//! Ruleset configuration schema.
//!
//! This module contains the struct definitions that map to the
//! `.gridiron.yml` configuration file format. Every key is optional; an
//! empty file is the default ruleset.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::FieldGeometry;
use crate::formation::{Formation, FormationSpec, Role, RoleClassifier};
use crate::rules::{RuleId, RuleLevel, RuleRegistry};
use crate::validator::FormationValidator;

/// Root configuration structure for `.gridiron.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetConfig {
    /// Field dimensions and line of scrimmage.
    pub field: FieldGeometry,

    /// Position labels for each role.
    pub roles: RoleLabels,

    /// Per-rule level overrides, keyed by rule id.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleLevel>,

    /// Where `onLOS` flags come from.
    pub line_flags: LineFlagPolicy,
}

/// Position label sets, one per role.
///
/// A missing set keeps the built-in labels for that role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lineman: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfield: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarterback: Option<Vec<String>>,
}

/// Source of each player's `onLOS` flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineFlagPolicy {
    /// Use the flags as written in the formation.
    #[default]
    Trust,
    /// Recompute every flag from the player's distance to the line.
    Derive,
}

impl RoleLabels {
    /// Build the classifier, filling unset roles with the built-in labels.
    pub fn classifier(&self) -> RoleClassifier {
        let defaults = RoleClassifier::default();
        let pick = |configured: &Option<Vec<String>>, role: Role| -> Vec<String> {
            match configured {
                Some(labels) => labels.clone(),
                None => defaults.labels(role).into_iter().map(String::from).collect(),
            }
        };

        RoleClassifier::new(
            pick(&self.lineman, Role::Lineman),
            pick(&self.receiver, Role::Receiver),
            pick(&self.backfield, Role::Backfield),
            pick(&self.quarterback, Role::Quarterback),
        )
    }
}

impl RulesetConfig {
    /// The role classifier for this ruleset.
    pub fn classifier(&self) -> RoleClassifier {
        self.roles.classifier()
    }

    /// The built-in rules with this ruleset's level overrides applied.
    ///
    /// Overrides naming unknown rules are skipped here; config validation
    /// reports them.
    pub fn registry(&self) -> RuleRegistry {
        let mut registry = RuleRegistry::with_builtins(&self.field);
        for (id, level) in &self.rules {
            if !registry.set_level(&RuleId::new(id.as_str()), *level) {
                tracing::warn!("Ignoring level for unknown rule '{}'", id);
            }
        }
        registry
    }

    /// A validator for this ruleset.
    pub fn validator(&self) -> FormationValidator {
        FormationValidator::with_registry(self.field, self.registry())
    }

    /// Classify a formation file and apply the line flag policy.
    pub fn formation(&self, spec: &FormationSpec) -> Formation {
        let formation = Formation::from_spec(spec, &self.classifier());
        match self.line_flags {
            LineFlagPolicy::Trust => formation,
            LineFlagPolicy::Derive => formation.realign(&self.field),
        }
    }
}
