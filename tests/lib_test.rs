//! Library integration tests.

use gridiron::GridironError;

#[test]
fn error_types_are_public() {
    let err = GridironError::UnknownFormation {
        id: "wishbone".into(),
    };
    assert!(err.to_string().contains("wishbone"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> gridiron::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use gridiron::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["gridiron", "rules", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Rules(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Rules command");
    }
}

#[test]
fn dispatcher_runs_commands_against_mock_ui() {
    use clap::Parser;
    use gridiron::cli::{Cli, CommandDispatcher};
    use gridiron::ui::MockUI;

    let temp = tempfile::TempDir::new().unwrap();
    let cli = Cli::parse_from(["gridiron", "validate", "--formation", "empty_gun_10"]);
    let mut ui = MockUI::new();

    let result = CommandDispatcher::new(temp.path().to_path_buf())
        .dispatch(&cli, &mut ui)
        .unwrap();

    assert!(result.success);
    assert!(ui.has_success("empty_gun_10 is a legal formation"));
}
