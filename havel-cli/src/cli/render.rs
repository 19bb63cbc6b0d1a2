//! Text rendering of command outcomes.

use std::io::{self, Write};

use havel_core::Graph;

use super::commands::{ExecutionSummary, Outcome};

/// Message printed when realization proves the sequence is not graphical.
pub const NOT_GRAPHICAL_MESSAGE: &str = "Sequence is not graphical!";

/// Renders `summary` to `writer`.
///
/// A realized graph is written with [`render_graph`]; a failed realization
/// writes [`NOT_GRAPHICAL_MESSAGE`]; a check writes `graphical` or
/// `not graphical`. Every form ends with a newline.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use havel_cli::cli::{ExecutionSummary, Outcome, render_summary};
/// # use havel_core::DegreeSequence;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     input: "demo".into(),
///     vertices: 3,
///     outcome: Outcome::Realized(DegreeSequence::new(vec![1, 2, 1]).realize()?),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "2\n1 3\n2\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match &summary.outcome {
        Outcome::Realized(graph) => render_graph(graph, writer),
        Outcome::NotGraphical(_) => writeln!(writer, "{NOT_GRAPHICAL_MESSAGE}"),
        Outcome::Checked { graphical: true } => writeln!(writer, "graphical"),
        Outcome::Checked { graphical: false } => writeln!(writer, "not graphical"),
    }
}

/// Writes one line per vertex listing its neighbours as one-based ids.
///
/// Isolated vertices produce empty lines.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_graph(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    for (_, neighbours) in graph.iter() {
        let mut ids = neighbours.iter().map(|&neighbour| neighbour + 1);
        if let Some(first) = ids.next() {
            write!(writer, "{first}")?;
        }
        for id in ids {
            write!(writer, " {id}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
