use apt_expressions::{Scalar, Tree, check_links, count_nodes, is_complete};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{Individual, Options};

pub(crate) fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Defaults with a smaller grow range so property tests stay quick.
pub(crate) fn small_options() -> Options {
    Options {
        min_grow_ops: 2,
        max_grow_ops: 8,
        ..Options::default()
    }
}

pub(crate) fn assert_well_formed(tree: &Tree) {
    assert!(is_complete(tree), "open slot in {tree}");
    check_links(tree).unwrap_or_else(|e| panic!("{e} in {tree}"));
}

pub(crate) fn assert_compact(tree: &Tree) {
    assert_eq!(tree.arena_len(), count_nodes(tree, tree.root()));
}

pub(crate) fn sample_values(ind: &Individual) -> Vec<[Scalar; 3]> {
    let pts = [(-1.0, -1.0), (-0.5, 0.25), (0.0, 0.0), (0.75, -0.3), (0.9, 0.9)];
    pts.iter().map(|&(x, y)| ind.eval(x, y).unwrap()).collect()
}

/// Bitwise equality, so NaN channels compare equal to themselves.
pub(crate) fn same_bits(a: &[[Scalar; 3]], b: &[[Scalar; 3]]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(p, q)| p.iter().zip(q).all(|(u, v)| u.to_bits() == v.to_bits()))
}

/// Relative comparison with NaN equal to NaN and infinities equal only to themselves.
pub(crate) fn same_value(a: Scalar, b: Scalar, rel: Scalar) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}
