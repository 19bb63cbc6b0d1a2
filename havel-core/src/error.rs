//! Error types for the Havel core library.
//!
//! Realization has exactly one domain failure, [`NotGraphical`], returned as
//! an ordinary result. Graph validation reports [`GraphInvariantViolation`].

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Proof that a degree sequence admits no simple undirected realization.
///
/// Vertex identifiers are zero-based positions in the original input order.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NotGraphical {
    /// Fewer vertices remain after `vertex` than its outstanding degree.
    #[error(
        "vertex {vertex} needs {required} more neighbours but only {available} vertices remain"
    )]
    InsufficientVertices {
        /// Vertex whose degree could not be satisfied.
        vertex: usize,
        /// Outstanding degree of `vertex` when it was processed.
        required: usize,
        /// Number of unprocessed vertices left to connect to.
        available: usize,
    },
    /// A required partner of `vertex` had no remaining degree.
    #[error("vertex {vertex} cannot connect to saturated vertex {target}")]
    SaturatedVertex {
        /// Vertex whose degree could not be satisfied.
        vertex: usize,
        /// Partner with no remaining degree.
        target: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`NotGraphical`] variants.
    enum NotGraphicalCode for NotGraphical {
        /// Fewer vertices remain than the outstanding degree.
        InsufficientVertices => InsufficientVertices { .. } => "NOT_GRAPHICAL_INSUFFICIENT_VERTICES",
        /// A required partner had no remaining degree.
        SaturatedVertex => SaturatedVertex { .. } => "NOT_GRAPHICAL_SATURATED_VERTEX",
    }
}

impl NotGraphical {
    /// Returns the vertex whose degree requirement could not be met.
    ///
    /// # Examples
    /// ```
    /// use havel_core::NotGraphical;
    ///
    /// let err = NotGraphical::SaturatedVertex { vertex: 2, target: 0 };
    /// assert_eq!(err.vertex(), 2);
    /// ```
    #[must_use]
    pub const fn vertex(&self) -> usize {
        match self {
            Self::InsufficientVertices { vertex, .. } | Self::SaturatedVertex { vertex, .. } => {
                *vertex
            }
        }
    }
}

/// Structural defect detected by [`crate::Graph::validate`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphInvariantViolation {
    /// An adjacency list referenced a vertex outside the graph.
    #[error("vertex {vertex} lists neighbour {neighbour} but the graph has {vertex_count} vertices")]
    NeighbourOutOfRange {
        /// Owner of the offending adjacency list.
        vertex: usize,
        /// Out-of-range neighbour id.
        neighbour: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A vertex listed itself as a neighbour.
    #[error("vertex {vertex} has a self-loop")]
    SelfLoop {
        /// Vertex with the self-loop.
        vertex: usize,
    },
    /// An adjacency list was not strictly ascending.
    #[error("adjacency list of vertex {vertex} is not strictly ascending at {neighbour}")]
    UnsortedNeighbours {
        /// Owner of the offending adjacency list.
        vertex: usize,
        /// First neighbour that breaks the ordering.
        neighbour: usize,
    },
    /// An edge was recorded on one endpoint only.
    #[error("vertex {vertex} lists {neighbour} but {neighbour} does not list {vertex}")]
    MissingBacklink {
        /// Vertex holding the one-sided edge.
        vertex: usize,
        /// Neighbour lacking the reverse edge.
        neighbour: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphInvariantViolation`] variants.
    enum GraphInvariantCode for GraphInvariantViolation {
        /// An adjacency list referenced a vertex outside the graph.
        NeighbourOutOfRange => NeighbourOutOfRange { .. } => "GRAPH_NEIGHBOUR_OUT_OF_RANGE",
        /// A vertex listed itself as a neighbour.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An adjacency list was not strictly ascending.
        UnsortedNeighbours => UnsortedNeighbours { .. } => "GRAPH_UNSORTED_NEIGHBOURS",
        /// An edge was recorded on one endpoint only.
        MissingBacklink => MissingBacklink { .. } => "GRAPH_MISSING_BACKLINK",
    }
}

/// Convenient alias for realization results.
pub type Result<T> = core::result::Result<T, NotGraphical>;
