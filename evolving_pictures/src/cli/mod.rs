pub mod args;
pub mod options;
pub mod output;

pub use options::run;
