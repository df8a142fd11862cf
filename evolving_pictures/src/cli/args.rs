// CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::options::cli_args::OptionsArgs;

#[derive(Parser, Debug, Clone)]
#[command(name = "evopic")]
#[command(about = "Breed pictures from random arithmetic trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a generation of random pictures as `<i>.apt` and `<i>.png`.
    Random {
        /// Number of pictures (defaults to --population-size).
        #[arg(long)]
        count: Option<usize>,

        /// Output directory (created if missing).
        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Render a saved picture to PNG.
    Render {
        input: PathBuf,

        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Breed the next generation from saved survivors.
    Evolve {
        #[arg(required = true, num_args = 1..)]
        survivors: Vec<PathBuf>,

        /// Output directory (created if missing).
        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Apply one random mutation to a saved picture.
    Mutate {
        input: PathBuf,

        #[arg(long)]
        out: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Image size as WIDTHxHEIGHT; overrides --width and --height.
    #[arg(long, value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    #[command(flatten)]
    pub options: OptionsArgs,
}

pub(crate) fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width `{w}`: {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height `{h}`: {e}"))?;
    Ok((w, h))
}
