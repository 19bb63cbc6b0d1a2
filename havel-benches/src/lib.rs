//! Benchmark support crate for havel.
//!
//! Provides deterministic degree-sequence generators used by the Criterion
//! realization benchmarks.

pub mod sequences;
