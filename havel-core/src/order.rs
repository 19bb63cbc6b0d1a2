//! Descending partial sort applied before each realization step.
//!
//! Between two consecutive steps only the degrees of the vertices that just
//! received an edge drop by one, so the suffix is already almost sorted. An
//! insertion pass therefore costs the suffix length plus the number of
//! displaced records instead of a full sort.

/// A vertex identity paired with its outstanding degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) vertex: usize,
    pub(crate) remaining: usize,
}

impl Slot {
    pub(crate) const fn new(vertex: usize, remaining: usize) -> Self {
        Self { vertex, remaining }
    }

    /// Returns the record as it was and clears its outstanding degree.
    pub(crate) fn consume(&mut self) -> Self {
        let taken = *self;
        self.remaining = 0;
        taken
    }
}

/// Builds the initial slot table in input order.
pub(crate) fn slots_from_degrees(degrees: Vec<usize>) -> Vec<Slot> {
    degrees
        .into_iter()
        .enumerate()
        .map(|(vertex, remaining)| Slot::new(vertex, remaining))
        .collect()
}

/// Stable insertion sort of `slots[from..]` by descending remaining degree.
///
/// Records with equal degrees keep their relative order. A `from` at or past
/// the end leaves the slice untouched.
pub(crate) fn sort_descending_from(slots: &mut [Slot], from: usize) {
    let Some(suffix) = slots.get_mut(from..) else {
        return;
    };
    for index in 1..suffix.len() {
        let mut cursor = index;
        // Strict comparison keeps equal degrees in their previous order.
        while let Some(previous) = cursor.checked_sub(1)
            && suffix
                .get(previous)
                .zip(suffix.get(cursor))
                .is_some_and(|(left, right)| left.remaining < right.remaining)
        {
            suffix.swap(previous, cursor);
            cursor = previous;
        }
    }
}
