//! Convenience re-exports for examples and quickstarts.

pub use crate::individual::{Individual, PictureError};
pub use crate::options::Options;
pub use crate::population::{BreedError, Population, breed};
pub use crate::render::{render_population, render_rgba};

// Re-export the tree types so callers don't need to depend on `apt_expressions` directly.
pub use apt_expressions::{EvalError, Op, ParseError, Tree, evaluate, parse, print_tree, string_tree};
