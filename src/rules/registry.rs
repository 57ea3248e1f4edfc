//! Rule registry for managing formation rules.
//!
//! The [`RuleRegistry`] stores the rules to run, in registration order, along
//! with any severity overrides from the ruleset config.

use std::collections::BTreeMap;

use super::checks::{
    BackfieldCountRule, CoveredReceiverRule, EndOfLineEligibilityRule, LineBalanceRule,
    LineCountRule, PlayerCountRule,
};
use super::diagnostic::Diagnostic;
use super::rule::{FormationRule, RuleId, RuleLevel};
use crate::field::FieldGeometry;
use crate::formation::Formation;

/// Ordered registry of formation rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn FormationRule>>,
    levels: BTreeMap<RuleId, RuleLevel>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            levels: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules, in evaluation order.
    pub fn with_builtins(field: &FieldGeometry) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PlayerCountRule));
        registry.register(Box::new(LineCountRule));
        registry.register(Box::new(BackfieldCountRule));
        registry.register(Box::new(EndOfLineEligibilityRule));
        registry.register(Box::new(CoveredReceiverRule::new(field.center_x)));
        registry.register(Box::new(LineBalanceRule::new(field.center_x)));
        registry
    }

    /// Register a rule.
    ///
    /// A rule with an id already in the registry replaces it in place.
    pub fn register(&mut self, rule: Box<dyn FormationRule>) {
        let id = rule.id();
        match self.rules.iter_mut().find(|r| r.id() == id) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn FormationRule> {
        self.rules.iter().find(|r| &r.id() == id).map(|r| r.as_ref())
    }

    /// Iterate over all rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn FormationRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Override the level a rule runs at.
    ///
    /// Returns `false` if no rule with that id is registered.
    pub fn set_level(&mut self, id: &RuleId, level: RuleLevel) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.levels.insert(id.clone(), level);
        true
    }

    /// The level a rule runs at: its override, or its default severity.
    pub fn level(&self, rule: &dyn FormationRule) -> RuleLevel {
        self.levels
            .get(&rule.id())
            .copied()
            .unwrap_or_else(|| rule.default_severity().into())
    }

    /// Run every enabled rule against a formation.
    ///
    /// Diagnostics come back grouped by rule in registration order, with the
    /// rule's effective severity applied.
    pub fn run(&self, formation: &Formation) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for rule in self.iter() {
            let Some(severity) = self.level(rule).severity() else {
                tracing::debug!("Skipping disabled rule {}", rule.id());
                continue;
            };

            let found = rule.check(formation);
            tracing::debug!("Rule {} produced {} diagnostic(s)", rule.id(), found.len());
            diagnostics.extend(found.into_iter().map(|mut d| {
                d.severity = severity;
                d
            }));
        }
        diagnostics
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
