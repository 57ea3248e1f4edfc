//! Catalog command implementations.
//!
//! `gridiron catalog list` browses the built-in formations and
//! `gridiron catalog show` prints one of them.

use serde::Serialize;

use crate::cli::args::{CatalogListArgs, CatalogShowArgs};
use crate::config::RulesetConfig;
use crate::error::Result;
use crate::formation::{Catalog, CatalogEntry};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Catalog entry metadata, without positions.
#[derive(Serialize)]
struct EntrySummary<'a> {
    id: &'a str,
    name: &'a str,
    personnel: &'a str,
    category: &'a str,
    description: &'a str,
    tags: &'a [String],
}

impl<'a> From<&'a CatalogEntry> for EntrySummary<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            id: &entry.id,
            name: &entry.name,
            personnel: &entry.personnel,
            category: &entry.category,
            description: &entry.description,
            tags: &entry.tags,
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?)
}

/// The `catalog list` command implementation.
pub struct CatalogListCommand {
    ruleset: RulesetConfig,
    args: CatalogListArgs,
}

impl CatalogListCommand {
    /// Create a new catalog list command.
    pub fn new(ruleset: RulesetConfig, args: CatalogListArgs) -> Self {
        Self { ruleset, args }
    }
}

impl Command for CatalogListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = Catalog::builtin()?;
        let entries = catalog.search(self.args.category.as_deref(), self.args.search.as_deref());

        if self.args.json {
            let summaries: Vec<EntrySummary<'_>> =
                entries.iter().map(|e| EntrySummary::from(*e)).collect();
            ui.output(&to_json(&summaries)?);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.warning("No formations match");
            ui.show_hint(&format!("Categories: {}", catalog.categories().join(", ")));
            return Ok(CommandResult::success());
        }

        let validator = self.ruleset.validator();
        let classifier = self.ruleset.classifier();
        let mut table = Table::new(["ID", "NAME", "PERSONNEL", "CATEGORY", "LEGAL"]);
        for entry in &entries {
            let legal = validator
                .validate_formation(&entry.formation(&classifier))
                .valid;
            table.add_row([
                entry.id.clone(),
                entry.name.clone(),
                entry.personnel.clone(),
                entry.category.clone(),
                if legal { "yes" } else { "no" }.to_string(),
            ]);
        }
        ui.output(&table.render());

        if ui.output_mode().shows_detail() {
            ui.message(&format!("{} of {} formations", entries.len(), catalog.len()));
        }

        Ok(CommandResult::success())
    }
}

/// The `catalog show` command implementation.
pub struct CatalogShowCommand {
    ruleset: RulesetConfig,
    args: CatalogShowArgs,
}

impl CatalogShowCommand {
    /// Create a new catalog show command.
    pub fn new(ruleset: RulesetConfig, args: CatalogShowArgs) -> Self {
        Self { ruleset, args }
    }
}

impl Command for CatalogShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = Catalog::builtin()?;
        let mut entry = catalog.require(&self.args.id)?.clone();

        let mut formation = entry.formation(&self.ruleset.classifier());
        if self.args.flip {
            formation = formation.mirrored(&self.ruleset.field);
            entry.positions = formation.to_spec().positions;
        }

        if self.args.json {
            ui.output(&to_json(&entry)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&entry.name);
        ui.message(&format!("ID: {}", entry.id));
        match entry.personnel_group() {
            Some(group) => ui.message(&format!("Personnel: {} ({})", group, group.describe())),
            None => ui.message(&format!("Personnel: {}", entry.personnel)),
        }
        ui.message(&format!("Category: {}", entry.category));
        if !entry.description.is_empty() {
            ui.message(&format!("Description: {}", entry.description));
        }
        if !entry.tags.is_empty() {
            ui.message(&format!("Tags: {}", entry.tags.join(", ")));
        }

        let mut table = Table::new(["PLAYER", "X", "Y", "ON LINE", "ELIGIBLE", "ROLE"]);
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        for (id, player) in formation.iter() {
            table.add_row([
                id.to_string(),
                player.x.to_string(),
                player.y.to_string(),
                yes_no(player.on_los).to_string(),
                yes_no(player.eligible).to_string(),
                player.role.to_string(),
            ]);
        }
        ui.output(&table.render());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridironError;
    use crate::ui::{MockUI, OutputMode};

    fn list(args: CatalogListArgs) -> MockUI {
        let mut ui = MockUI::new();
        let result = CatalogListCommand::new(RulesetConfig::default(), args)
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        ui
    }

    fn show(args: CatalogShowArgs) -> MockUI {
        let mut ui = MockUI::new();
        let result = CatalogShowCommand::new(RulesetConfig::default(), args)
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        ui
    }

    #[test]
    fn lists_every_formation_as_legal() {
        let ui = list(CatalogListArgs::default());
        let text = ui.output_text();

        assert!(text.starts_with("ID"));
        assert!(text.contains("gun_trips_right_11"));
        assert!(text.contains("i_form_pro_21"));
        for line in text.lines().skip(1) {
            assert!(line.ends_with("yes"), "{}", line);
        }
    }

    #[test]
    fn filters_by_category() {
        let ui = list(CatalogListArgs {
            category: Some("shotgun".to_string()),
            ..Default::default()
        });
        let text = ui.output_text();

        assert!(text.contains("gun_trips_right_11"));
        assert!(!text.contains("i_form_pro_21"));
    }

    #[test]
    fn no_match_warns_with_categories() {
        let ui = list(CatalogListArgs {
            search: Some("wishbone".to_string()),
            ..Default::default()
        });

        assert!(ui.has_warning("No formations match"));
        assert!(ui.has_hint("shotgun"));
    }

    #[test]
    fn list_json_omits_positions() {
        let ui = list(CatalogListArgs {
            search: Some("i-form".to_string()),
            json: true,
            ..Default::default()
        });
        let json: serde_json::Value = serde_json::from_str(&ui.output_text()).unwrap();
        let entries = json.as_array().unwrap();

        assert!(entries.iter().any(|e| e["id"] == "i_form_pro_21"));
        assert!(entries.iter().all(|e| e.get("positions").is_none()));
    }

    #[test]
    fn verbose_list_counts_matches() {
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        CatalogListCommand::new(RulesetConfig::default(), CatalogListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("6 of 6 formations"));
    }

    #[test]
    fn shows_entry_details() {
        let ui = show(CatalogShowArgs {
            id: "i_form_pro_21".to_string(),
            ..Default::default()
        });

        assert!(ui.headers().contains(&"I-Form Pro".to_string()));
        assert!(ui.has_message("Personnel: 21 (2 RB, 1 TE, 2 WR)"));
        assert!(ui.has_message("Category: under_center"));
        let text = ui.output_text();
        assert!(text.contains("FB"));
        assert!(text.lines().any(|l| l.starts_with("X ") && l.contains("150")));
    }

    #[test]
    fn show_json_with_flip() {
        let ui = show(CatalogShowArgs {
            id: "i_form_pro_21".to_string(),
            flip: true,
            json: true,
        });
        let json: serde_json::Value = serde_json::from_str(&ui.output_text()).unwrap();

        assert_eq!(json["id"], "i_form_pro_21");
        assert_eq!(json["positions"]["X"]["x"], 1050.0);
        assert_eq!(json["positions"]["Y"]["x"], 480.0);
        assert_eq!(json["positions"]["Y"]["onLOS"], true);
    }

    #[test]
    fn show_unknown_id_errors() {
        let mut ui = MockUI::new();
        let result = CatalogShowCommand::new(
            RulesetConfig::default(),
            CatalogShowArgs {
                id: "wishbone".to_string(),
                ..Default::default()
            },
        )
        .execute(&mut ui);

        assert!(matches!(result, Err(GridironError::UnknownFormation { .. })));
    }
}
