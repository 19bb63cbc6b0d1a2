//! Command-line interface orchestration for havel.
//!
//! Offers a `realize` command that builds a graph from a degree sequence and
//! prints its adjacency lists, and a `check` command that only reports
//! whether the sequence is graphical. Both read a vertex count followed by
//! the degrees from a file or standard input.

mod commands;
mod input;
mod render;

pub use commands::{Cli, CliError, Command, ExecutionSummary, InputArgs, Outcome, run_cli};
pub use input::{InputError, InputErrorCode, parse_sequence, read_sequence};
pub use render::{NOT_GRAPHICAL_MESSAGE, render_graph, render_summary};

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;
