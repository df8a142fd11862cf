use core::fmt;
use core::str::FromStr;

use apt_expressions::{EvalError, Op, ParseError, Scalar, Tree, parse};
use rand::Rng;
use tracing::trace;

use crate::mutation_functions::{crossover, mutate_node, random_node, random_tree};
use crate::options::Options;

/// One picture: a red, a green and a blue channel tree, each in its own arena.
#[derive(Clone, Debug)]
pub struct Individual {
    pub r: Tree,
    pub g: Tree,
    pub b: Tree,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PictureError {
    Parse(ParseError),
    /// The text parsed, but its root is not a `picture` node.
    NotAPicture { root: Op },
    /// A channel slot of the `picture` node is empty.
    MissingChannel { channel: usize },
}

impl fmt::Display for PictureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PictureError::Parse(e) => write!(f, "{e}"),
            PictureError::NotAPicture { root } => write!(f, "expected a picture node at the root, found {root:?}"),
            PictureError::MissingChannel { channel } => write!(f, "picture has no tree for channel {channel}"),
        }
    }
}

impl std::error::Error for PictureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PictureError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for PictureError {
    fn from(e: ParseError) -> Self {
        PictureError::Parse(e)
    }
}

impl Individual {
    pub fn new(r: Tree, g: Tree, b: Tree) -> Self {
        Self { r, g, b }
    }

    /// Three independent random channels.
    pub fn new_random<R: Rng + ?Sized>(rng: &mut R, options: &Options) -> Self {
        let r = random_tree(rng, options);
        let g = random_tree(rng, options);
        let b = random_tree(rng, options);
        Self { r, g, b }
    }

    pub fn channels(&self) -> [&Tree; 3] {
        [&self.r, &self.g, &self.b]
    }

    /// Channel by index: 0 red, 1 green, 2 blue. Panics on any other index.
    pub fn channel(&self, i: usize) -> &Tree {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("channel index {i} out of range"),
        }
    }

    pub fn channel_mut(&mut self, i: usize) -> &mut Tree {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("channel index {i} out of range"),
        }
    }

    /// Mutate one uniformly chosen node of one uniformly chosen channel.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R, options: &Options) {
        let channel = rng.random_range(0..3);
        let tree = self.channel_mut(channel);
        let node = random_node(tree, rng);
        mutate_node(tree, rng, node, options);
        tree.compact();
        trace!(channel, "mutated individual");
    }

    /// See [`crossover`].
    pub fn crossover<R: Rng + ?Sized>(&self, other: &Individual, rng: &mut R) -> Individual {
        crossover(self, other, rng)
    }

    /// `[r, g, b]` at `(x, y)`.
    pub fn eval(&self, x: Scalar, y: Scalar) -> Result<[Scalar; 3], EvalError> {
        Ok([self.r.eval(x, y)?, self.g.eval(x, y)?, self.b.eval(x, y)?])
    }

    /// A single tree with a `picture` root holding copies of the three channels.
    pub fn to_picture_tree(&self) -> Tree {
        let mut tree = Tree::new(Op::Picture);
        let root = tree.root();
        for (slot, channel) in self.channels().into_iter().enumerate() {
            let copy = tree.copy_subtree(channel, channel.root(), Some(root));
            tree.set_child(root, slot, copy);
        }
        tree
    }

    pub fn from_picture_tree(tree: &Tree) -> Result<Self, PictureError> {
        let root = tree.root();
        let op = tree.op(root);
        if op != Op::Picture {
            return Err(PictureError::NotAPicture { root: op });
        }
        let channel = |i: usize| {
            tree.node(root)
                .child(i)
                .map(|id| tree.extract(id))
                .ok_or(PictureError::MissingChannel { channel: i })
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(1)?,
            b: channel(2)?,
        })
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( picture\n{}\n{}\n{} )", self.r, self.g, self.b)
    }
}

impl FromStr for Individual {
    type Err = PictureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Individual::from_picture_tree(&parse(s)?)
    }
}
