use proptest::prelude::*;

use crate::node::{NodeId, OPERATORS, Op};
use crate::tree::Tree;

/// Owned, recursive shape used as an intermediate before building an arena [`Tree`].
#[derive(Clone, Debug)]
pub enum GenTree {
    Leaf(Op),
    Op { op: Op, children: Vec<GenTree> },
}

impl GenTree {
    pub fn to_tree(&self) -> Tree {
        let mut tree = Tree::new(self.op());
        let root = tree.root();
        self.fill_children(&mut tree, root);
        tree
    }

    fn op(&self) -> Op {
        match self {
            GenTree::Leaf(op) | GenTree::Op { op, .. } => *op,
        }
    }

    fn fill_children(&self, tree: &mut Tree, id: NodeId) {
        if let GenTree::Op { children, .. } = self {
            for (slot, child) in children.iter().enumerate() {
                let cid = tree.add_child(id, slot, child.op());
                child.fill_children(tree, cid);
            }
        }
    }
}

/// `x`, `y` or a constant in `[-1, 1)`. Constants are multiples of 1/256, so the 9-decimal text
/// form is exact and a printed tree parses back to the same values.
pub fn arb_leaf_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::X),
        Just(Op::Y),
        (-256i32..256).prop_map(|k| Op::Const(k as f32 / 256.0)),
    ]
}

pub fn arb_operator() -> impl Strategy<Value = Op> {
    prop::sample::select(OPERATORS.to_vec())
}

/// Complete trees (no open slots) over the random-generator operator set.
pub fn arb_gen_tree(depth: u32, desired_size: u32) -> BoxedStrategy<GenTree> {
    arb_leaf_op()
        .prop_map(GenTree::Leaf)
        .prop_recursive(depth, desired_size, 3, |inner| {
            (arb_operator(), prop::collection::vec(inner, 3)).prop_map(|(op, mut children)| {
                children.truncate(op.arity());
                GenTree::Op { op, children }
            })
        })
        .boxed()
}

pub fn arb_tree(depth: u32, desired_size: u32) -> impl Strategy<Value = Tree> {
    arb_gen_tree(depth, desired_size).prop_map(|g| g.to_tree())
}
