use std::ops::Range;

use rand::Rng;

/// Uniform draw from `range`; an empty range yields its start instead of panicking.
pub(crate) fn usize_range<R: Rng + ?Sized>(rng: &mut R, range: Range<usize>) -> usize {
    if range.start >= range.end {
        return range.start;
    }
    rng.random_range(range)
}

/// `true` with probability `hits / (hits + misses)`; always `false` when both are zero.
pub(crate) fn weighted_coin<R: Rng + ?Sized>(rng: &mut R, hits: u32, misses: u32) -> bool {
    let total = hits.saturating_add(misses);
    total > 0 && rng.random_range(0..total) < hits
}
