use core::fmt;

use ndarray::Array2;

use crate::node::{NodeId, Op, Scalar};
use crate::noise::{NODE_OCTAVES, fbm_2d, simplex_2d, turbulence_2d};
use crate::tree::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// A `picture` node was reached; it only groups channels for storage.
    EvalOnContainer { node: NodeId },
    /// A child slot on the evaluation path was never filled.
    OpenSlot { node: NodeId, slot: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::EvalOnContainer { node } => write!(f, "node {node} is a picture container and has no value"),
            EvalError::OpenSlot { node, slot } => write!(f, "node {node} has no child in slot {slot}"),
        }
    }
}

impl std::error::Error for EvalError {}

impl Tree {
    /// Value of the whole tree at `(x, y)`.
    pub fn eval(&self, x: Scalar, y: Scalar) -> Result<Scalar, EvalError> {
        self.eval_node(self.root(), x, y)
    }

    /// Value of the subtree rooted at `id` at `(x, y)`.
    pub fn eval_node(&self, id: NodeId, x: Scalar, y: Scalar) -> Result<Scalar, EvalError> {
        let node = self.node(id);
        let child = |slot: usize| -> Result<Scalar, EvalError> {
            match node.child(slot) {
                Some(c) => self.eval_node(c, x, y),
                None => Err(EvalError::OpenSlot { node: id, slot }),
            }
        };

        let v = match node.op {
            Op::X => x,
            Op::Y => y,
            Op::Const(v) => v,
            Op::Picture => return Err(EvalError::EvalOnContainer { node: id }),

            Op::Add => child(0)? + child(1)?,
            Op::Sub => child(0)? - child(1)?,
            Op::Mul => child(0)? * child(1)?,
            Op::Div => child(0)? / child(1)?,
            Op::Atan2 => y.atan2(x),
            Op::Noise => {
                let (a, b) = (child(0)?, child(1)?);
                80.0 * simplex_2d(f64::from(a), f64::from(b)) as Scalar - 2.0
            }

            Op::Atan => child(0)?.atan(),
            Op::Sin => child(0)?.sin(),
            Op::Cos => child(0)?.cos(),
            Op::Ceil => child(0)?.ceil(),
            Op::Floor => child(0)?.floor(),
            Op::Negate => -child(0)?,
            Op::Square => {
                let a = child(0)?;
                a * a
            }
            Op::Abs => child(0)?.abs(),

            Op::Fbm => {
                let (a, b, freq) = (child(0)?, child(1)?, child(2)?);
                fbm_2d(f64::from(a), f64::from(b), f64::from(freq), NODE_OCTAVES) as Scalar
            }
            Op::Turbulence => {
                let (a, b, freq) = (child(0)?, child(1)?, child(2)?);
                turbulence_2d(f64::from(a), f64::from(b), f64::from(freq), NODE_OCTAVES) as Scalar
            }
        };
        Ok(v)
    }
}

/// Free-function form of [`Tree::eval`].
#[inline]
pub fn evaluate(tree: &Tree, x: Scalar, y: Scalar) -> Result<Scalar, EvalError> {
    tree.eval(x, y)
}

/// Maps pixel `i` of an axis of length `len` into `[-1, 1)`.
#[inline]
pub fn pixel_coord(i: usize, len: usize) -> Scalar {
    i as Scalar / len as Scalar * 2.0 - 1.0
}

/// Evaluate `tree` at every pixel of a `height x width` grid (row `yi`, column `xi`).
pub fn eval_grid(tree: &Tree, width: usize, height: usize) -> Result<Array2<Scalar>, EvalError> {
    let mut out = Array2::<Scalar>::zeros((height, width));
    for ((yi, xi), v) in out.indexed_iter_mut() {
        *v = tree.eval(pixel_coord(xi, width), pixel_coord(yi, height))?;
    }
    Ok(out)
}
