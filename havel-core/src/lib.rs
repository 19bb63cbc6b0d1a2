//! Havel core library.
//!
//! Decides whether a degree sequence is graphical and, when it is, builds a
//! simple undirected graph realizing it with the Havel–Hakimi procedure.
//!
//! ```
//! use havel_core::{DegreeSequence, NotGraphical};
//!
//! let graph = DegreeSequence::new(vec![2, 2, 2]).realize()?;
//! assert_eq!(graph.degrees(), vec![2, 2, 2]);
//!
//! let err = DegreeSequence::new(vec![1, 0]).realize().unwrap_err();
//! assert_eq!(err.code().as_str(), "NOT_GRAPHICAL_SATURATED_VERTEX");
//! # Ok::<(), NotGraphical>(())
//! ```

mod erdos_gallai;
mod error;
mod graph;
mod order;
mod realize;
mod sequence;

#[cfg(test)]
#[path = "../tests/common/proptest_profile.rs"]
mod test_utils;

pub use crate::{
    erdos_gallai::is_graphical,
    error::{GraphInvariantCode, GraphInvariantViolation, NotGraphical, NotGraphicalCode, Result},
    graph::Graph,
    realize::realize,
    sequence::DegreeSequence,
};
