use core::fmt::{self, Write};

use crate::node::{NodeId, Op, Scalar};
use crate::tree::Tree;

/// Digits after the decimal point when writing a constant.
pub const CONST_DECIMALS: usize = 9;

pub fn default_string_constant(v: Scalar) -> String {
    format!("{:.*}", CONST_DECIMALS, v)
}

fn write_node<W: Write>(tree: &Tree, id: NodeId, out: &mut W) -> fmt::Result {
    let node = tree.node(id);
    let Some(name) = node.op.name() else {
        let Op::Const(v) = node.op else {
            unreachable!("only constants are nameless")
        };
        return write!(out, "{:.*}", CONST_DECIMALS, v);
    };
    if node.arity() == 0 {
        return out.write_str(name);
    }

    // Channels of a picture go on their own lines.
    let sep = if node.op == Op::Picture { '\n' } else { ' ' };
    write!(out, "( {name}")?;
    for child in node.children() {
        out.write_char(sep)?;
        match *child {
            Some(c) => write_node(tree, c, out)?,
            None => out.write_char('_')?,
        }
    }
    out.write_str(" )")
}

/// Text form of the subtree rooted at `id`.
pub fn string_subtree(tree: &Tree, id: NodeId) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(tree, id, &mut s);
    s
}

/// Text form of the whole tree, e.g. `( + x 0.500000000 )`.
///
/// Open slots print as `_`, which the parser rejects.
pub fn string_tree(tree: &Tree) -> String {
    string_subtree(tree, tree.root())
}

pub fn print_tree(tree: &Tree) {
    println!("{}", string_tree(tree));
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, self.root(), f)
    }
}
