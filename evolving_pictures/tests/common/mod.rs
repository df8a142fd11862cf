use evolving_pictures::Options;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[allow(dead_code)]
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A quick setup: small trees and thumbnails.
#[allow(dead_code)]
pub fn quick_options() -> Options {
    Options {
        min_grow_ops: 3,
        max_grow_ops: 10,
        width: 16,
        height: 12,
        progress: false,
        ..Options::default()
    }
}
