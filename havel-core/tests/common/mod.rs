mod proptest_profile;

use havel_core::Graph;

pub use proptest_profile::suite_proptest_config;

/// Collects neighbour lists as owned vectors for direct comparison.
#[must_use]
pub fn adjacency(graph: &Graph) -> Vec<Vec<usize>> {
    graph
        .iter()
        .map(|(_, neighbours)| neighbours.to_vec())
        .collect()
}
