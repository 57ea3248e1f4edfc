//! Schema command implementation.
//!
//! The `gridiron schema` command prints the JSON Schema of the formation
//! file format, for editors and other producers of formation files.

use crate::error::Result;
use crate::formation::FormationSpec;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }

    /// Render the formation file schema as pretty JSON.
    pub fn render() -> Result<String> {
        let schema = schemars::schema_for!(FormationSpec);
        Ok(serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?)
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.output(&Self::render()?);
        Ok(CommandResult::success())
    }
}
