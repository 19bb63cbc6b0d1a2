//! Realization of known degree sequences, including the non-graphical
//! outcomes and their reported causes.

mod common;

use havel_core::{DegreeSequence, NotGraphical, realize};
use rstest::rstest;

use common::adjacency;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn init_tracing() {
    // Exercise the instrumentation; a subscriber from another test may
    // already be installed.
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

#[rstest]
#[case::complete_k4(
    vec![3, 3, 3, 3],
    vec![vec![1, 2, 3], vec![0, 2, 3], vec![0, 1, 3], vec![0, 1, 2]],
)]
#[case::triangle(vec![2, 2, 2], vec![vec![1, 2], vec![0, 2], vec![0, 1]])]
#[case::single_isolated(vec![0], vec![vec![]])]
#[case::all_isolated(vec![0, 0, 0], vec![vec![], vec![], vec![]])]
#[case::path(vec![1, 2, 1], vec![vec![1], vec![0, 2], vec![1]])]
#[case::star_centre_last(vec![1, 1, 1, 3], vec![vec![3], vec![3], vec![3], vec![0, 1, 2]])]
fn realizes_known_sequences(
    #[case] degrees: Vec<usize>,
    #[case] expected: Vec<Vec<usize>>,
) -> TestResult {
    init_tracing();
    let graph = realize(DegreeSequence::new(degrees.clone()))?;
    assert_eq!(adjacency(&graph), expected);
    assert_eq!(graph.degrees(), degrees);
    graph.validate()?;
    Ok(())
}

#[test]
fn empty_sequence_yields_empty_graph() -> TestResult {
    let graph = DegreeSequence::default().realize()?;
    assert!(graph.is_empty());
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    Ok(())
}

#[rstest]
#[case::overfull(
    vec![3, 3, 3],
    NotGraphical::InsufficientVertices { vertex: 0, required: 3, available: 2 },
)]
#[case::odd_pair(vec![1, 0], NotGraphical::SaturatedVertex { vertex: 0, target: 1 })]
#[case::lonely_one(vec![1], NotGraphical::InsufficientVertices { vertex: 0, required: 1, available: 0 })]
#[case::even_sum_blocked(
    vec![3, 3, 1, 1],
    NotGraphical::SaturatedVertex { vertex: 1, target: 2 },
)]
fn rejects_non_graphical_sequences(#[case] degrees: Vec<usize>, #[case] expected: NotGraphical) {
    init_tracing();
    assert_eq!(realize(DegreeSequence::new(degrees)), Err(expected));
}

#[test]
fn huge_degree_fails_without_overflow() {
    let err = realize(DegreeSequence::new(vec![usize::MAX, 1]));
    assert!(matches!(
        err,
        Err(NotGraphical::InsufficientVertices { vertex: 0, available: 1, .. })
    ));
}

#[test]
fn edges_are_reported_once_in_canonical_order() -> TestResult {
    let graph = realize(DegreeSequence::new(vec![2, 2, 2]))?;
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges, vec![(0, 1), (0, 2), (1, 2)]);
    Ok(())
}
