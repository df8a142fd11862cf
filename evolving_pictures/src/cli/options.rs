// CLI entrypoint + option wiring.

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::cli::args::{Cli, Command, CommonArgs};
use crate::cli::output::{read_individual, render_png, write_apt, write_generation};
use crate::individual::Individual;
use crate::options::Options;
use crate::population::{Population, breed};
use crate::render::render_population;

pub fn run() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Random { count, out, common } => {
            let mut options = resolve_options(&common)?;
            if let Some(n) = count {
                options.population_size = n;
            }
            let mut rng = StdRng::seed_from_u64(options.seed);
            let pop = Population::new_random(&mut rng, &options);
            let rendered = render_population(&pop.members, options.width, options.height, options.progress)
                .context("failed to render random pictures")?;
            write_generation(&out, &pop.members, rendered, options.width, options.height)?;
            info!(count = pop.len(), dir = %out.display(), "random generation written");
        }
        Command::Render { input, out, common } => {
            let options = resolve_options(&common)?;
            let ind = read_individual(&input)?;
            render_png(&out, &ind, options.width, options.height)?;
        }
        Command::Evolve { survivors, out, common } => {
            let options = resolve_options(&common)?;
            let parents = survivors
                .iter()
                .map(|p| read_individual(p))
                .collect::<anyhow::Result<Vec<Individual>>>()?;
            let mut rng = StdRng::seed_from_u64(options.seed);
            let children = breed(&parents, options.population_size, &mut rng).context("failed to breed survivors")?;
            let rendered = render_population(&children, options.width, options.height, options.progress)
                .context("failed to render offspring")?;
            write_generation(&out, &children, rendered, options.width, options.height)?;
            info!(survivors = parents.len(), offspring = children.len(), dir = %out.display(), "generation written");
        }
        Command::Mutate { input, out, common } => {
            let options = resolve_options(&common)?;
            let mut ind = read_individual(&input)?;
            let mut rng = StdRng::seed_from_u64(options.seed);
            ind.mutate(&mut rng, &options);
            write_apt(&out, &ind)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub(crate) fn resolve_options(common: &CommonArgs) -> anyhow::Result<Options> {
    let mut options = Options::default();
    common.options.apply_to(&mut options);
    if let Some((w, h)) = common.size {
        options.width = w;
        options.height = h;
    }
    validate_options(&options)?;
    Ok(options)
}

fn validate_options(opt: &Options) -> anyhow::Result<()> {
    anyhow::ensure!(opt.population_size > 0, "population_size must be > 0");
    anyhow::ensure!(
        opt.min_grow_ops <= opt.max_grow_ops,
        "min_grow_ops must be <= max_grow_ops"
    );
    anyhow::ensure!(
        opt.operator_weight > 0 || opt.leaf_weight > 0,
        "operator_weight and leaf_weight cannot both be 0"
    );
    anyhow::ensure!(opt.width > 0 && opt.height > 0, "image size must be non-zero");
    Ok(())
}
