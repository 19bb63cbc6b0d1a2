//! Erdős–Gallai characterisation of graphical sequences.
//!
//! Decides graphicality without building a graph. It is independent of the
//! Havel–Hakimi construction and serves as a cross-check for it.

/// Returns `true` when some simple undirected graph has exactly `degrees`.
///
/// A sequence `d₁ ≥ … ≥ dₙ` is graphical iff its sum is even and, for every
/// `k`, `Σ_{i≤k} dᵢ ≤ k(k−1) + Σ_{i>k} min(dᵢ, k)`.
///
/// # Examples
/// ```
/// use havel_core::is_graphical;
///
/// assert!(is_graphical(&[3, 3, 3, 3]));
/// assert!(!is_graphical(&[3, 3, 3]));
/// assert!(is_graphical(&[]));
/// ```
#[must_use]
pub fn is_graphical(degrees: &[usize]) -> bool {
    let count = degrees.len();
    if degrees.iter().any(|&degree| degree >= count) {
        return false;
    }
    let mut sorted = degrees.to_vec();
    sorted.sort_unstable_by(|left, right| right.cmp(left));

    // Degrees are below `count` here, so every partial sum fits in `u128`.
    let total: u128 = sorted.iter().map(|&degree| widen(degree)).sum();
    if total & 1 == 1 {
        return false;
    }

    let mut head_sum: u128 = 0;
    for (index, &degree) in sorted.iter().enumerate() {
        let k = index + 1;
        head_sum += widen(degree);
        let tail: u128 = sorted
            .iter()
            .skip(k)
            .map(|&rest| widen(rest.min(k)))
            .sum();
        let wide_k = widen(k);
        if head_sum > wide_k * (wide_k - 1) + tail {
            return false;
        }
    }
    true
}

fn widen(value: usize) -> u128 {
    u128::try_from(value).unwrap_or(u128::MAX)
}
