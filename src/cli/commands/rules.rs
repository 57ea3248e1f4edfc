//! Rules command implementation.
//!
//! The `gridiron rules` command lists the registered rules with the level
//! the current ruleset gives them.

use serde::Serialize;

use crate::cli::args::RulesArgs;
use crate::config::RulesetConfig;
use crate::error::Result;
use crate::rules::RuleLevel;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

#[derive(Serialize)]
struct RuleInfo {
    id: String,
    name: String,
    description: String,
    level: RuleLevel,
}

/// The rules command implementation.
pub struct RulesCommand {
    ruleset: RulesetConfig,
    args: RulesArgs,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(ruleset: RulesetConfig, args: RulesArgs) -> Self {
        Self { ruleset, args }
    }

    fn collect(&self) -> Vec<RuleInfo> {
        let registry = self.ruleset.registry();
        registry
            .iter()
            .map(|rule| RuleInfo {
                id: rule.id().to_string(),
                name: rule.name().to_string(),
                description: rule.description().to_string(),
                level: registry.level(rule),
            })
            .collect()
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rules = self.collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&rules).map_err(anyhow::Error::from)?;
            ui.output(&json);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(["RULE", "LEVEL", "DESCRIPTION"]);
        for rule in &rules {
            table.add_row([
                rule.id.clone(),
                rule.level.to_string(),
                rule.description.clone(),
            ]);
        }
        ui.output(&table.render());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn run(ruleset: RulesetConfig, json: bool) -> MockUI {
        let mut ui = MockUI::new();
        let result = RulesCommand::new(ruleset, RulesArgs { json })
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        ui
    }

    #[test]
    fn lists_rules_in_evaluation_order() {
        let ui = run(RulesetConfig::default(), false);
        let ids: Vec<String> = ui
            .output_text()
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().next().map(String::from))
            .collect();

        assert_eq!(
            ids,
            vec![
                "player-count",
                "line-count",
                "backfield-count",
                "end-of-line-eligibility",
                "covered-receiver",
                "line-balance",
            ]
        );
    }

    #[test]
    fn shows_configured_levels() {
        let mut ruleset = RulesetConfig::default();
        ruleset
            .rules
            .insert("covered-receiver".to_string(), RuleLevel::Off);

        let ui = run(ruleset, true);
        let json: serde_json::Value = serde_json::from_str(&ui.output_text()).unwrap();
        let rules = json.as_array().unwrap();

        let level = |id: &str| {
            rules
                .iter()
                .find(|r| r["id"] == id)
                .map(|r| r["level"].clone())
                .unwrap()
        };
        assert_eq!(level("covered-receiver"), "off");
        assert_eq!(level("line-balance"), "warning");
        assert_eq!(level("player-count"), "error");
        assert_eq!(rules[0]["name"], "Player Count");
    }
}
