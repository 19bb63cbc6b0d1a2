//! Degree sequences consumed by realization.

use crate::{Result, graph::Graph, realize::realize};

/// Ordered list of required vertex degrees, indexed by input order.
///
/// # Examples
/// ```
/// use havel_core::DegreeSequence;
///
/// let sequence = DegreeSequence::new(vec![2, 2, 2]);
/// assert_eq!(sequence.len(), 3);
/// assert!(sequence.has_even_sum());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreeSequence {
    degrees: Vec<usize>,
}

impl DegreeSequence {
    /// Wraps `degrees` without reordering them.
    #[must_use]
    pub const fn new(degrees: Vec<usize>) -> Self {
        Self { degrees }
    }

    /// Number of vertices described by the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Returns `true` when the sequence describes no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    /// Borrows the degrees in input order.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.degrees
    }

    /// Largest requested degree, or `None` for the empty sequence.
    ///
    /// # Examples
    /// ```
    /// use havel_core::DegreeSequence;
    ///
    /// assert_eq!(DegreeSequence::new(vec![1, 4, 2]).max_degree(), Some(4));
    /// assert_eq!(DegreeSequence::default().max_degree(), None);
    /// ```
    #[must_use]
    pub fn max_degree(&self) -> Option<usize> {
        self.degrees.iter().copied().max()
    }

    /// Returns `true` when the degrees add up to an even number.
    ///
    /// Computed from the parity of each degree so arbitrarily large values
    /// cannot overflow.
    #[must_use]
    pub fn has_even_sum(&self) -> bool {
        self.degrees.iter().filter(|degree| *degree & 1 == 1).count() & 1 == 0
    }

    /// Consumes the sequence and realizes it as a simple graph.
    ///
    /// # Errors
    /// Returns [`crate::NotGraphical`] when no simple graph has these degrees.
    ///
    /// # Examples
    /// ```
    /// use havel_core::DegreeSequence;
    ///
    /// let graph = DegreeSequence::new(vec![1, 1]).realize()?;
    /// assert_eq!(graph.neighbours(0), Some(&[1][..]));
    /// # Ok::<(), havel_core::NotGraphical>(())
    /// ```
    pub fn realize(self) -> Result<Graph> {
        realize(self)
    }

    pub(crate) fn into_vec(self) -> Vec<usize> {
        self.degrees
    }
}

impl From<Vec<usize>> for DegreeSequence {
    fn from(degrees: Vec<usize>) -> Self {
        Self::new(degrees)
    }
}

impl FromIterator<usize> for DegreeSequence {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
