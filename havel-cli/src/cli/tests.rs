//! Unit tests for the CLI commands, input handling, and rendering.

use super::commands::{derive_input_name, run_check, run_realize};
use super::test_helpers::{
    check_cli, create_input_file, realize_cli, render_to_string, run_cli_expecting_error,
    temp_dir,
};
use super::{
    Cli, CliError, Command, ExecutionSummary, InputArgs, InputError, NOT_GRAPHICAL_MESSAGE,
    Outcome, run_cli,
};

use std::path::Path;

use clap::Parser;
use havel_core::NotGraphical;
use rstest::rstest;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
#[case::stem_with_extension("/tmp/degrees.txt", "degrees")]
#[case::stem_without_extension("/tmp/degrees", "degrees")]
#[case::missing_stem("", "input")]
fn derive_input_name_selects_expected_name(#[case] raw_path: &str, #[case] expected: &str) {
    assert_eq!(derive_input_name(Path::new(raw_path)), expected);
}

#[rstest]
#[case::complete_k4("4\n3 3 3 3\n", "2 3 4\n1 3 4\n1 2 4\n1 2 3\n")]
#[case::triangle("3\n2 2 2\n", "2 3\n1 3\n1 2\n")]
#[case::isolated("1\n0\n", "\n")]
#[case::empty_sequence("0\n", "")]
#[case::path_with_isolated("4 1 0 2 1", "3\n\n1 4\n3\n")]
fn realize_prints_adjacency_lists(#[case] contents: &str, #[case] expected: &str) -> TestResult {
    let dir = temp_dir();
    let path = create_input_file(&dir, "degrees.txt", contents)?;
    let summary = run_cli(realize_cli(path))?;
    assert_eq!(summary.input, "degrees");
    assert!(matches!(summary.outcome, Outcome::Realized(_)));
    assert_eq!(render_to_string(&summary)?, expected);
    Ok(())
}

#[rstest]
#[case::overfull("3\n3 3 3\n")]
#[case::odd_sum("2\n1 0\n")]
fn realize_reports_non_graphical_sequences(#[case] contents: &str) -> TestResult {
    let dir = temp_dir();
    let path = create_input_file(&dir, "degrees.txt", contents)?;
    let summary = run_realize(&InputArgs { input: Some(path) })?;
    assert!(matches!(summary.outcome, Outcome::NotGraphical(_)));
    assert_eq!(
        render_to_string(&summary)?,
        format!("{NOT_GRAPHICAL_MESSAGE}\n")
    );
    Ok(())
}

#[test]
fn realize_keeps_failure_cause() -> TestResult {
    let dir = temp_dir();
    let path = create_input_file(&dir, "degrees.txt", "3 3 3 3")?;
    let summary = run_cli(realize_cli(path))?;
    assert_eq!(summary.vertices, 3);
    assert_eq!(
        summary.outcome,
        Outcome::NotGraphical(NotGraphical::InsufficientVertices {
            vertex: 0,
            required: 3,
            available: 2,
        })
    );
    Ok(())
}

#[rstest]
#[case::graphical("4 3 3 3 3", true, "graphical\n")]
#[case::not_graphical("3 3 3 3", false, "not graphical\n")]
fn check_reports_graphicality(
    #[case] contents: &str,
    #[case] expected: bool,
    #[case] rendered: &str,
) -> TestResult {
    let dir = temp_dir();
    let path = create_input_file(&dir, "degrees.txt", contents)?;
    let summary = run_check(&InputArgs { input: Some(path.clone()) })?;
    assert_eq!(summary.outcome, Outcome::Checked { graphical: expected });
    assert_eq!(render_to_string(&summary)?, rendered);

    let via_cli = run_cli(check_cli(path))?;
    assert_eq!(via_cli.outcome, summary.outcome);
    Ok(())
}

#[test]
fn realize_rejects_missing_file() -> TestResult {
    let dir = temp_dir();
    let path = dir.path().join("absent.txt");
    let err = run_cli_expecting_error(realize_cli(path.clone()), "missing file must fail");
    match err {
        CliError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[rstest]
#[case::empty("")]
#[case::short("3 1 1")]
#[case::negative("2 -1 1")]
fn realize_rejects_malformed_input(#[case] contents: &str) -> TestResult {
    let dir = temp_dir();
    let path = create_input_file(&dir, "degrees.txt", contents)?;
    let err = run_cli_expecting_error(realize_cli(path), "malformed input must fail");
    assert!(matches!(err, CliError::Input(_)));
    Ok(())
}

#[test]
fn input_errors_keep_their_code() -> TestResult {
    let dir = temp_dir();
    let path = create_input_file(&dir, "degrees.txt", "two 1 1")?;
    let err = run_cli_expecting_error(check_cli(path), "bad count must fail");
    match err {
        CliError::Input(input @ InputError::InvalidCount { .. }) => {
            assert_eq!(input.code().as_str(), "INPUT_INVALID_COUNT");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[test]
fn render_summary_writes_not_graphical_message() -> TestResult {
    let summary = ExecutionSummary {
        input: "demo".into(),
        vertices: 2,
        outcome: Outcome::NotGraphical(NotGraphical::SaturatedVertex {
            vertex: 0,
            target: 1,
        }),
    };
    assert_eq!(render_to_string(&summary)?, "Sequence is not graphical!\n");
    Ok(())
}

#[rstest]
#[case::realize_with_file(&["havel", "realize", "degrees.txt"], true)]
#[case::realize_from_stdin(&["havel", "realize"], true)]
#[case::check_dash(&["havel", "check", "-"], true)]
#[case::unknown_command(&["havel", "draw"], false)]
#[case::missing_command(&["havel"], false)]
fn clap_parses_commands(#[case] args: &[&str], #[case] accepted: bool) {
    assert_eq!(Cli::try_parse_from(args).is_ok(), accepted);
}

#[test]
fn dash_selects_standard_input() {
    let cli = match Cli::try_parse_from(["havel", "check", "-"]) {
        Ok(cli) => cli,
        Err(err) => panic!("`-` must parse: {err}"),
    };
    match cli.command {
        Command::Check(args) => assert_eq!(args.input.as_deref(), Some(Path::new("-"))),
        Command::Realize(_) => panic!("expected the check command"),
    }
}
