//! Havel–Hakimi realization of degree sequences.
//!
//! Each step sorts the unprocessed suffix by descending outstanding degree,
//! then connects the vertex at the front of the suffix to the next `d`
//! vertices, where `d` is its outstanding degree. The greedy choice is exact:
//! the procedure only fails when the sequence is not graphical.

use tracing::{Span, debug, field, info, instrument};

use crate::{
    Result,
    error::NotGraphical,
    graph::Graph,
    order::{Slot, slots_from_degrees, sort_descending_from},
    sequence::DegreeSequence,
};

/// Builds a simple undirected graph whose degrees match `sequence`.
///
/// Vertex `i` of the returned graph corresponds to position `i` of the input.
/// A partially built graph is dropped on failure.
///
/// # Errors
/// Returns [`NotGraphical::InsufficientVertices`] when a vertex needs more
/// partners than unprocessed vertices remain, and
/// [`NotGraphical::SaturatedVertex`] when a required partner has no degree
/// left.
///
/// # Examples
/// ```
/// use havel_core::{DegreeSequence, NotGraphical, realize};
///
/// let graph = realize(DegreeSequence::new(vec![3, 3, 3, 3]))?;
/// assert_eq!(graph.neighbours(0), Some(&[1, 2, 3][..]));
///
/// let err = realize(DegreeSequence::new(vec![3, 3, 3])).unwrap_err();
/// assert!(matches!(err, NotGraphical::InsufficientVertices { .. }));
/// # Ok::<(), NotGraphical>(())
/// ```
#[instrument(
    name = "core.realize",
    skip(sequence),
    fields(vertices = sequence.len(), edges = field::Empty),
)]
pub fn realize(sequence: DegreeSequence) -> Result<Graph> {
    let mut slots = slots_from_degrees(sequence.into_vec());
    let mut graph = Graph::with_vertices(slots.len());

    for position in 0..slots.len() {
        if let Err(err) = saturate(&mut slots, position, &mut graph) {
            debug!(
                code = %err.code(),
                vertex = err.vertex(),
                position,
                "sequence is not graphical"
            );
            return Err(err);
        }
    }

    debug_assert_eq!(graph.validate(), Ok(()));
    Span::current().record("edges", graph.edge_count());
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "realization completed"
    );
    Ok(graph)
}

/// Runs one step: reorders the suffix starting at `position` and connects the
/// front vertex to as many successors as it still requires.
fn saturate(slots: &mut [Slot], position: usize, graph: &mut Graph) -> Result<()> {
    sort_descending_from(slots, position);
    let Some(current) = slots.get_mut(position).map(Slot::consume) else {
        return Ok(());
    };

    let available = slots.len() - position - 1;
    for offset in 1..=current.remaining {
        let target_position = position + offset;
        let Some(target) = slots.get_mut(target_position) else {
            return Err(NotGraphical::InsufficientVertices {
                vertex: current.vertex,
                required: current.remaining,
                available,
            });
        };
        if target.remaining == 0 {
            return Err(NotGraphical::SaturatedVertex {
                vertex: current.vertex,
                target: target.vertex,
            });
        }
        target.remaining -= 1;
        graph.connect(current.vertex, target.vertex);
    }
    Ok(())
}
