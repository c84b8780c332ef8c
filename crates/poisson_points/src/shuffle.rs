//! In-place Fisher-Yates shuffle driven by a [`PointRng`].
use crate::rng::PointRng;

/// Uniformly permute `items` in place.
///
/// Walks from the back and swaps each slot with a uniformly drawn slot at or before it, so the
/// permutation is uniform whenever `random_int` is.
pub fn shuffle_points<T>(items: &mut [T], rng: &mut dyn PointRng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_int(i);
        items.swap(i, j);
    }
}
