//! Integration tests for the validation API.

use gridiron::config::{parse_config, validate, RulesetConfig};
use gridiron::field::FieldGeometry;
use gridiron::formation::{Catalog, Formation, FormationSpec, PlayerPosition, Role, RoleClassifier};
use gridiron::rules::{Diagnostic, FormationRule, RuleId, RuleRegistry, Severity};
use gridiron::validator::FormationValidator;
use std::path::Path;

fn catalog_formation(id: &str) -> Formation {
    Catalog::builtin()
        .unwrap()
        .require(id)
        .unwrap()
        .formation(&RoleClassifier::default())
}

#[test]
fn every_catalog_formation_is_legal_both_ways() {
    let validator = FormationValidator::default();
    let field = FieldGeometry::default();
    for entry in Catalog::builtin().unwrap().iter() {
        let formation = entry.formation(&RoleClassifier::default());

        let report = validator.validate_formation(&formation);
        assert!(report.valid, "{}: {:?}", entry.id, report.violations);

        let flipped = validator.validate_formation(&formation.mirrored(&field));
        assert!(flipped.valid, "{} flipped: {:?}", entry.id, flipped.violations);
    }
}

#[test]
fn auto_fix_repairs_a_short_line_and_is_idempotent() {
    let validator = FormationValidator::default();
    let mut formation = catalog_formation("singleback_ace_12");
    let ids: Vec<String> = formation.on_line().map(|(id, _)| id.to_string()).collect();
    let lifted = &ids[0];
    let original = formation.get(lifted).cloned().unwrap();
    formation.insert(
        lifted.as_str(),
        PlayerPosition::new(original.x, 356.0, false, original.eligible, original.role),
    );
    assert!(!validator.validate_formation(&formation).valid);

    let fixed = validator.auto_fix_formation(&formation);
    assert!(validator.validate_formation(&fixed).valid);
    assert_eq!(validator.auto_fix_formation(&fixed), fixed);
    assert!(!formation.get(lifted).unwrap().on_los);
}

#[test]
fn ruleset_from_yaml_drives_the_validator() {
    let config = parse_config(
        "roles:\n  lineman: [C, LG, RG, LT, RT, END]\nrules:\n  line-balance: off\n",
        Path::new(".gridiron.yml"),
    )
    .unwrap();
    validate(&config).unwrap();

    let spec: FormationSpec = serde_yaml::from_str(
        r#"
positions:
  END: { x: 480, y: 350, onLOS: true, eligible: true }
  LT: { x: 520, y: 350, onLOS: true }
  LG: { x: 560, y: 350, onLOS: true }
  C: { x: 600, y: 350, onLOS: true }
  RG: { x: 640, y: 350, onLOS: true }
  RT: { x: 680, y: 350, onLOS: true }
  TE: { x: 720, y: 350, onLOS: true, eligible: true }
  Z: { x: 1050, y: 365, eligible: true }
  X: { x: 150, y: 365, eligible: true }
  QB: { x: 600, y: 390 }
  RB: { x: 600, y: 450, eligible: true }
"#,
    )
    .unwrap();
    let formation = config.formation(&spec);

    assert_eq!(formation.get("END").unwrap().role, Role::Lineman);
    assert!(config.validator().validate_formation(&formation).valid);
}

#[test]
fn invalid_ruleset_fails_validation() {
    let mut config = RulesetConfig::default();
    config.field.width = 0.0;
    assert!(validate(&config).is_err());
}

struct NoQuarterbackRule;

impl FormationRule for NoQuarterbackRule {
    fn id(&self) -> RuleId {
        RuleId::new("needs-quarterback")
    }

    fn name(&self) -> &str {
        "Needs Quarterback"
    }

    fn description(&self) -> &str {
        "A formation needs a quarterback"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, formation: &Formation) -> Vec<Diagnostic> {
        if formation.iter().any(|(_, p)| p.role == Role::Quarterback) {
            return vec![];
        }
        vec![Diagnostic::new(self.id(), self.default_severity(), "No quarterback")]
    }
}

#[test]
fn custom_rules_plug_into_the_registry() {
    let field = FieldGeometry::default();
    let mut registry = RuleRegistry::with_builtins(&field);
    registry.register(Box::new(NoQuarterbackRule));
    let validator = FormationValidator::with_registry(field, registry);

    let formation = catalog_formation("gun_doubles_11");
    assert!(validator.validate_formation(&formation).warnings.is_empty());

    let qb_id = formation
        .iter()
        .find(|(_, p)| p.role == Role::Quarterback)
        .map(|(id, _)| id.to_string())
        .unwrap();
    let without = formation.without(&qb_id);
    let report = validator.validate_formation(&without);
    assert!(report.warnings.contains(&"No quarterback".to_string()));
}

#[test]
fn flip_keeps_verdicts_with_an_off_middle_center() {
    let field = FieldGeometry {
        width: 1000.0,
        center_x: 600.0,
        ..FieldGeometry::default()
    };
    let validator = FormationValidator::new(field);
    let formation = catalog_formation("i_form_pro_21");

    let report = validator.validate_formation(&formation);
    let flipped = validator.validate_formation(&formation.mirrored(&field));

    assert!(report.valid && report.warnings.is_empty());
    assert_eq!(flipped, report);
}
