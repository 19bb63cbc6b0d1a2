//! Simple undirected graphs stored as sorted adjacency lists.

use crate::error::GraphInvariantViolation;

/// Undirected simple graph produced by realization.
///
/// Each vertex owns its neighbour list, kept strictly ascending. Every edge
/// appears in the lists of both endpoints.
///
/// # Examples
/// ```
/// use havel_core::DegreeSequence;
///
/// let graph = DegreeSequence::new(vec![2, 2, 2]).realize()?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.neighbours(1), Some(&[0, 2][..]));
/// # Ok::<(), havel_core::NotGraphical>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates `vertex_count` isolated vertices.
    pub(crate) fn with_vertices(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Self {
        Self { adjacency }
    }

    /// Records the undirected edge `{left, right}` on both endpoints.
    ///
    /// Callers guarantee `left != right`, both in range, and that the edge is
    /// new. Debug builds assert the first two.
    pub(crate) fn connect(&mut self, left: usize, right: usize) {
        debug_assert_ne!(left, right, "self-loops are not representable");
        debug_assert!(
            left < self.vertex_count() && right < self.vertex_count(),
            "edge {{{left}, {right}}} is out of range for {} vertices",
            self.vertex_count(),
        );
        insert_sorted(self.adjacency.get_mut(left), right);
        insert_sorted(self.adjacency.get_mut(right), left);
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` for the graph without vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() >> 1
    }

    /// Ascending neighbour list of `vertex`, or `None` when out of range.
    #[must_use]
    pub fn neighbours(&self, vertex: usize) -> Option<&[usize]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Degree of `vertex`, or `None` when out of range.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Degrees of every vertex in vertex order.
    ///
    /// For a realized graph this reproduces the input sequence.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// Iterates over `(vertex, neighbours)` in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(vertex, neighbours)| (vertex, neighbours.as_slice()))
    }

    /// Iterates over every edge once as `(u, v)` with `u < v`, ordered by `u`
    /// then `v`.
    ///
    /// # Examples
    /// ```
    /// use havel_core::DegreeSequence;
    ///
    /// let graph = DegreeSequence::new(vec![1, 2, 1]).realize()?;
    /// let edges: Vec<_> = graph.edges().collect();
    /// assert_eq!(edges, vec![(0, 1), (1, 2)]);
    /// # Ok::<(), havel_core::NotGraphical>(())
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter().flat_map(|(vertex, neighbours)| {
            neighbours
                .iter()
                .copied()
                .filter(move |&neighbour| neighbour > vertex)
                .map(move |neighbour| (vertex, neighbour))
        })
    }

    /// Checks the structural invariants of a simple undirected graph.
    ///
    /// # Errors
    /// Returns the first [`GraphInvariantViolation`] found, scanning vertices
    /// in order: out-of-range neighbours, self-loops, lists that are not
    /// strictly ascending, and edges missing their reverse entry.
    pub fn validate(&self) -> Result<(), GraphInvariantViolation> {
        let vertex_count = self.vertex_count();
        for (vertex, neighbours) in self.iter() {
            let mut previous: Option<usize> = None;
            for &neighbour in neighbours {
                if neighbour >= vertex_count {
                    return Err(GraphInvariantViolation::NeighbourOutOfRange {
                        vertex,
                        neighbour,
                        vertex_count,
                    });
                }
                if neighbour == vertex {
                    return Err(GraphInvariantViolation::SelfLoop { vertex });
                }
                if previous.is_some_and(|prior| prior >= neighbour) {
                    return Err(GraphInvariantViolation::UnsortedNeighbours { vertex, neighbour });
                }
                previous = Some(neighbour);
            }
        }
        for (vertex, neighbours) in self.iter() {
            for &neighbour in neighbours {
                let has_backlink = self
                    .neighbours(neighbour)
                    .is_some_and(|list| list.binary_search(&vertex).is_ok());
                if !has_backlink {
                    return Err(GraphInvariantViolation::MissingBacklink { vertex, neighbour });
                }
            }
        }
        Ok(())
    }
}

fn insert_sorted(list: Option<&mut Vec<usize>>, value: usize) {
    if let Some(list) = list {
        let position = list.partition_point(|&existing| existing < value);
        list.insert(position, value);
    }
}
