//! Degree-sequence generators for benchmarks.
//!
//! Random sequences are read off an Erdős–Rényi graph so they are graphical
//! by construction; regular sequences stress the tie handling of the
//! per-step sort.

use std::fmt;

use havel_core::DegreeSequence;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Parameters for [`random_graphical`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edge probability in percent, clamped to `0..=100`.
    pub edge_percent: u32,
    /// Seed for the pseudo-random generator.
    pub seed: u64,
}

impl fmt::Display for RandomGraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}%", self.vertex_count, self.edge_percent)
    }
}

/// Degree sequence of a `G(n, p)` random graph.
///
/// # Examples
/// ```
/// use havel_benches::sequences::{RandomGraphConfig, random_graphical};
///
/// let sequence = random_graphical(&RandomGraphConfig {
///     vertex_count: 10,
///     edge_percent: 50,
///     seed: 7,
/// });
/// assert_eq!(sequence.len(), 10);
/// assert!(havel_core::is_graphical(sequence.as_slice()));
/// ```
#[must_use]
pub fn random_graphical(config: &RandomGraphConfig) -> DegreeSequence {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let percent = config.edge_percent.min(100);
    let mut degrees = vec![0_usize; config.vertex_count];
    for left in 0..config.vertex_count {
        for right in (left + 1)..config.vertex_count {
            if rng.gen_ratio(percent, 100) {
                increment(&mut degrees, left);
                increment(&mut degrees, right);
            }
        }
    }
    DegreeSequence::new(degrees)
}

/// `vertex_count` copies of `degree`.
///
/// Graphical iff `degree < vertex_count` and `degree * vertex_count` is even.
#[must_use]
pub fn regular(vertex_count: usize, degree: usize) -> DegreeSequence {
    DegreeSequence::new(vec![degree; vertex_count])
}

fn increment(degrees: &mut [usize], vertex: usize) {
    if let Some(degree) = degrees.get_mut(vertex) {
        *degree += 1;
    }
}
