use apt_expressions::{Scalar, Tree, parse};

#[allow(dead_code)]
pub fn tree(text: &str) -> Tree {
    parse(text).unwrap_or_else(|e| panic!("failed to parse {text:?}: {e}"))
}

/// A small lattice over the picture square plus a few points outside it.
#[allow(dead_code)]
pub fn sample_points() -> Vec<(Scalar, Scalar)> {
    let mut pts = Vec::new();
    for i in 0..5 {
        for j in 0..5 {
            pts.push((i as Scalar * 0.5 - 1.0, j as Scalar * 0.5 - 1.0));
        }
    }
    pts.extend([(0.3, -0.7), (2.5, 1.75), (-3.0, 0.125)]);
    pts
}

/// Relative comparison that treats NaN == NaN and equal infinities as the same value.
#[allow(dead_code)]
pub fn same_value(a: Scalar, b: Scalar, rel: Scalar) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

#[allow(dead_code)]
pub fn assert_same_eval(a: &Tree, b: &Tree) {
    for (x, y) in sample_points() {
        let va = a.eval(x, y).unwrap();
        let vb = b.eval(x, y).unwrap();
        assert!(same_value(va, vb, 1e-5), "at ({x}, {y}): {va} vs {vb}\n{a}\n{b}");
    }
}
