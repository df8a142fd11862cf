pub mod evaluate;
pub mod lexer;
pub mod node;
pub mod node_utils;
pub mod noise;
pub mod parse;
#[cfg(feature = "proptest")]
pub mod proptest_utils;
pub mod strings;
pub mod tree;

pub use crate::evaluate::{EvalError, eval_grid, evaluate, pixel_coord};
pub use crate::lexer::{Lexer, Token, TokenKind};
pub use crate::node::{MAX_ARITY, Node, NodeId, OPERATORS, Op, Scalar};
pub use crate::node_utils::{
    LinkError, check_links, count_depth, count_nodes, first_open_slot, is_complete, nth_node, open_slots, preorder,
};
pub use crate::parse::{MAX_PARSE_DEPTH, ParseError, parse};
pub use crate::strings::{print_tree, string_subtree, string_tree};
pub use crate::tree::Tree;
