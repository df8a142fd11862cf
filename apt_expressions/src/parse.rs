use core::fmt;
use core::str::FromStr;

use crate::lexer::{Lexer, Token, TokenKind};
use crate::node::{Node, NodeId, Op, Scalar};
use crate::tree::Tree;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownOperator { name: String, offset: usize },
    MalformedNumber { text: String, offset: usize },
    /// Input ended while `expected` more child nodes were still needed.
    UnexpectedEof { expected: usize },
    /// An operator or constant follows a complete tree.
    TrailingInput { offset: usize },
    /// No operator or constant at all.
    Empty,
    /// Nesting below [`MAX_PARSE_DEPTH`] at the node starting at `offset`.
    TooDeep { offset: usize },
    /// More nodes than a [`NodeId`] can address.
    TooManyNodes,
}

/// Deepest node nesting [`parse`] accepts, counting the root as depth 1.
pub const MAX_PARSE_DEPTH: usize = 512;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownOperator { name, offset } => write!(f, "unknown operator `{name}` at byte {offset}"),
            ParseError::MalformedNumber { text, offset } => write!(f, "malformed number `{text}` at byte {offset}"),
            ParseError::UnexpectedEof { expected } => {
                write!(f, "unexpected end of input, {expected} more node(s) expected")
            }
            ParseError::TrailingInput { offset } => write!(f, "unexpected input after a complete tree at byte {offset}"),
            ParseError::Empty => f.write_str("no tree in input"),
            ParseError::TooDeep { offset } => {
                write!(f, "tree nests deeper than {MAX_PARSE_DEPTH} nodes at byte {offset}")
            }
            ParseError::TooManyNodes => f.write_str("tree has more nodes than can be addressed"),
        }
    }
}

impl std::error::Error for ParseError {}

struct Parser<'src> {
    tokens: Lexer<'src>,
    nodes: Vec<Node>,
    /// Slots still waiting for a node, counting the root.
    pending: usize,
}

impl<'src> Parser<'src> {
    /// Next operator or constant token; parentheses only group and are skipped.
    fn next_significant(&mut self) -> Option<Token<'src>> {
        self.tokens
            .by_ref()
            .find(|t| !matches!(t.kind, TokenKind::OpenParen | TokenKind::CloseParen))
    }

    fn parse_node(&mut self, parent: Option<NodeId>, depth: usize) -> Result<NodeId, ParseError> {
        let Some(token) = self.next_significant() else {
            return Err(if self.nodes.is_empty() {
                ParseError::Empty
            } else {
                ParseError::UnexpectedEof { expected: self.pending }
            });
        };

        if depth > MAX_PARSE_DEPTH {
            return Err(ParseError::TooDeep { offset: token.offset });
        }

        let op = match token.kind {
            TokenKind::Constant => {
                let value: Scalar = token.text.parse().map_err(|_| ParseError::MalformedNumber {
                    text: token.text.to_string(),
                    offset: token.offset,
                })?;
                Op::Const(value)
            }
            _ => Op::from_name(token.text).ok_or_else(|| ParseError::UnknownOperator {
                name: token.text.to_string(),
                offset: token.offset,
            })?,
        };

        let id = NodeId(u32::try_from(self.nodes.len()).map_err(|_| ParseError::TooManyNodes)?);
        self.nodes.push(Node::new(op, parent));
        self.pending = self.pending - 1 + op.arity();
        for slot in 0..op.arity() {
            let child = self.parse_node(Some(id), depth + 1)?;
            self.nodes[id.index()].children_mut()[slot] = Some(child);
        }
        Ok(id)
    }
}

/// Parse the text form of a tree, e.g. `( + x ( sin y ) )`.
///
/// Every operator gets exactly its arity in children. Closing parentheses after the tree are
/// accepted; any further operator or constant is [`ParseError::TrailingInput`].
pub fn parse(text: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser {
        tokens: Lexer::new(text),
        nodes: Vec::new(),
        pending: 1,
    };
    let root = parser.parse_node(None, 1)?;
    if let Some(extra) = parser.next_significant() {
        return Err(ParseError::TrailingInput { offset: extra.offset });
    }
    Ok(Tree::from_parts(parser.nodes, root))
}

impl FromStr for Tree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
