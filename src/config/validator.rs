//! Ruleset configuration validation.
//!
//! This module checks a parsed ruleset for problems serde cannot catch:
//! - Field dimensions must be positive and the line must lie on the field
//! - A position label may belong to only one role
//! - Rule overrides must name a known rule

use crate::config::schema::RulesetConfig;
use crate::error::{GridironError, Result};
use crate::rules::{RuleId, RuleRegistry};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a ruleset and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &RulesetConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_field(config));
    errors.extend(validate_roles(config));
    errors.extend(validate_rule_overrides(config));

    errors
}

fn validate_field(config: &RulesetConfig) -> Vec<ValidationError> {
    let field = &config.field;
    let mut errors = Vec::new();

    // NaN fails every comparison below, so it is rejected too.
    if !(field.width > 0.0) {
        errors.push(ValidationError::new(
            "field-width",
            format!("field.width must be positive, got {}", field.width),
        ));
    }
    if !(field.height > 0.0) {
        errors.push(ValidationError::new(
            "field-height",
            format!("field.height must be positive, got {}", field.height),
        ));
    }
    if !(field.los_tolerance >= 0.0) {
        errors.push(ValidationError::new(
            "field-tolerance",
            format!(
                "field.los_tolerance must not be negative, got {}",
                field.los_tolerance
            ),
        ));
    }
    if !(0.0..=field.height).contains(&field.los_y) {
        errors.push(ValidationError::new(
            "field-los",
            format!(
                "field.los_y must be between 0 and {}, got {}",
                field.height, field.los_y
            ),
        ));
    }
    if !(0.0..=field.width).contains(&field.center_x) {
        errors.push(ValidationError::new(
            "field-center",
            format!(
                "field.center_x must be between 0 and {}, got {}",
                field.width, field.center_x
            ),
        ));
    }

    errors
}

fn validate_roles(config: &RulesetConfig) -> Vec<ValidationError> {
    config
        .classifier()
        .overlapping_labels()
        .into_iter()
        .map(|label| {
            ValidationError::new(
                "role-overlap",
                format!("Label '{}' is assigned to more than one role", label),
            )
        })
        .collect()
}

fn validate_rule_overrides(config: &RulesetConfig) -> Vec<ValidationError> {
    let registry = RuleRegistry::with_builtins(&config.field);
    config
        .rules
        .keys()
        .filter(|id| registry.get(&RuleId::new(id.as_str())).is_none())
        .map(|id| {
            let known: Vec<String> = registry.iter().map(|r| r.id().0).collect();
            ValidationError::new(
                "unknown-rule",
                format!("Unknown rule '{}' (known: {})", id, known.join(", ")),
            )
        })
        .collect()
}

/// Validate a ruleset, returning an error that lists every problem.
pub fn validate(config: &RulesetConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(GridironError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RoleLabels;
    use crate::rules::RuleLevel;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RulesetConfig::default()).is_empty());
        assert!(validate(&RulesetConfig::default()).is_ok());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let mut config = RulesetConfig::default();
        config.field.width = 0.0;
        config.field.height = -10.0;

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "field-width"));
        assert!(errors.iter().any(|e| e.rule == "field-height"));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let mut config = RulesetConfig::default();
        config.field.los_tolerance = -1.0;

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "field-tolerance");
    }

    #[test]
    fn rejects_line_off_the_field() {
        let mut config = RulesetConfig::default();
        config.field.los_y = 700.0;
        config.field.center_x = 1300.0;

        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "field-los"));
        assert!(errors.iter().any(|e| e.rule == "field-center"));
    }

    #[test]
    fn rejects_nan() {
        let mut config = RulesetConfig::default();
        config.field.width = f64::NAN;

        assert!(validate_config(&config)
            .iter()
            .any(|e| e.rule == "field-width"));
    }

    #[test]
    fn rejects_overlapping_labels() {
        let config = RulesetConfig {
            roles: RoleLabels {
                lineman: Some(vec!["C".into(), "TE".into()]),
                ..Default::default()
            },
            ..Default::default()
        };

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "role-overlap");
        assert!(errors[0].message.contains("TE"));
    }

    #[test]
    fn rejects_unknown_rule_override() {
        let mut config = RulesetConfig::default();
        config.rules.insert("wishbone".into(), RuleLevel::Off);
        config.rules.insert("line-balance".into(), RuleLevel::Off);

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("wishbone"));
        assert!(errors[0].message.contains("player-count"));
    }

    #[test]
    fn validate_joins_messages() {
        let mut config = RulesetConfig::default();
        config.field.width = 0.0;
        config.field.los_tolerance = -1.0;

        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("field.width"));
        assert!(err.contains("; "));
        assert!(err.contains("field.los_tolerance"));
    }
}
