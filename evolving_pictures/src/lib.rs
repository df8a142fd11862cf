pub(crate) mod individual;
pub(crate) mod mutation_functions;
pub(crate) mod options;
pub(crate) mod population;
pub mod prelude;
pub(crate) mod progress_bars;
pub(crate) mod random;
pub mod render;

#[cfg(feature = "cli")]
pub mod cli;

pub use individual::{Individual, PictureError};
pub use mutation_functions::{
    crossover, fill_leaves, grow, insert_random_op, mutate_node, random_leaf_node, random_node, random_operator_node,
    random_tree,
};
pub use options::Options;
pub use population::{BreedError, Population, breed};
pub use render::{channel_to_byte, render_population, render_rgba};

#[cfg(test)]
mod tests;
