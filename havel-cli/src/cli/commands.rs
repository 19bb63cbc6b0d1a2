//! Command implementations and argument parsing for the havel CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use havel_core::{DegreeSequence, Graph, NotGraphical, is_graphical};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::input::{InputError, read_sequence};

const STDIN_NAME: &str = "stdin";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "havel",
    about = "Realize graphical degree sequences as simple undirected graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a graph with the given degrees and print its adjacency lists.
    Realize(InputArgs),
    /// Report whether the degrees are graphical without building a graph.
    Check(InputArgs),
}

/// Input selection shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct InputArgs {
    /// File holding a vertex count followed by the degrees. Reads standard
    /// input when omitted or `-`.
    pub input: Option<PathBuf>,
}

impl InputArgs {
    fn path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The degree sequence could not be read or parsed.
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Realization succeeded.
    Realized(Graph),
    /// Realization proved the sequence is not graphical.
    NotGraphical(NotGraphical),
    /// Outcome of a graphicality check.
    Checked {
        /// Whether the sequence is graphical.
        graphical: bool,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the input, `stdin` or the file stem.
    pub input: String,
    /// Number of vertices in the parsed sequence.
    pub vertices: usize,
    /// What the command produced.
    pub outcome: Outcome,
}

/// Executes the CLI command represented by `cli`.
///
/// A sequence that is not graphical is a successful execution whose
/// [`Outcome`] says so; only I/O and parse failures are errors.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be opened, read, or parsed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use havel_cli::cli::{Cli, Command, InputArgs, Outcome, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n2 2 2\n")?;
/// let cli = Cli {
///     command: Command::Realize(InputArgs {
///         input: Some(file.path().to_path_buf()),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(matches!(summary.outcome, Outcome::Realized(_)));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Realize(args) => {
            Span::current().record("command", field::display("realize"));
            run_realize(&args)
        }
        Command::Check(args) => {
            Span::current().record("command", field::display("check"));
            run_check(&args)
        }
    }
}

#[instrument(name = "cli.realize", err, skip(args), fields(input = field::Empty))]
pub(super) fn run_realize(args: &InputArgs) -> Result<ExecutionSummary, CliError> {
    let (input, sequence) = load_sequence(args)?;
    Span::current().record("input", field::display(&input));
    let vertices = sequence.len();
    let outcome = match sequence.realize() {
        Ok(graph) => {
            info!(
                input = input.as_str(),
                vertices,
                edges = graph.edge_count(),
                "sequence realized"
            );
            Outcome::Realized(graph)
        }
        Err(err) => {
            info!(
                input = input.as_str(),
                vertices,
                code = %err.code(),
                reason = %err,
                "sequence is not graphical"
            );
            Outcome::NotGraphical(err)
        }
    };
    Ok(ExecutionSummary {
        input,
        vertices,
        outcome,
    })
}

#[instrument(name = "cli.check", err, skip(args), fields(input = field::Empty))]
pub(super) fn run_check(args: &InputArgs) -> Result<ExecutionSummary, CliError> {
    let (input, sequence) = load_sequence(args)?;
    Span::current().record("input", field::display(&input));
    let graphical = is_graphical(sequence.as_slice());
    info!(
        input = input.as_str(),
        vertices = sequence.len(),
        graphical,
        "check completed"
    );
    Ok(ExecutionSummary {
        input,
        vertices: sequence.len(),
        outcome: Outcome::Checked { graphical },
    })
}

fn load_sequence(args: &InputArgs) -> Result<(String, DegreeSequence), CliError> {
    match args.path() {
        Some(path) => {
            let reader = open_input(path)?;
            Ok((derive_input_name(path), read_sequence(reader)?))
        }
        None => Ok((STDIN_NAME.to_owned(), read_sequence(io::stdin().lock())?)),
    }
}

#[instrument(name = "cli.open_input", err, fields(path = field::Empty))]
pub(super) fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_input_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "input".to_owned(), ToOwned::to_owned)
}
