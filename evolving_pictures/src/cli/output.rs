// Reading and writing picture files.

use std::fs;
use std::path::Path;

use anyhow::Context;
use image::RgbaImage;
use tracing::info;

use crate::individual::Individual;
use crate::render::render_rgba;

pub fn read_individual(path: &Path) -> anyhow::Result<Individual> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    text.parse::<Individual>()
        .with_context(|| format!("failed to parse picture in {}", path.display()))
}

pub fn write_apt(path: &Path, individual: &Individual) -> anyhow::Result<()> {
    fs::write(path, individual.to_string()).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote picture");
    Ok(())
}

pub fn write_png(path: &Path, pixels: Vec<u8>, width: u32, height: u32) -> anyhow::Result<()> {
    let img = RgbaImage::from_raw(width, height, pixels).context("pixel buffer does not match image size")?;
    img.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), width, height, "wrote image");
    Ok(())
}

pub fn render_png(path: &Path, individual: &Individual, width: u32, height: u32) -> anyhow::Result<()> {
    let pixels = render_rgba(individual, width, height).context("failed to evaluate picture")?;
    write_png(path, pixels, width, height)
}

/// Write `<i>.apt` and `<i>.png` for every picture into `dir`.
pub fn write_generation(
    dir: &Path,
    individuals: &[Individual],
    rendered: Vec<Vec<u8>>,
    width: u32,
    height: u32,
) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for (i, (ind, pixels)) in individuals.iter().zip(rendered).enumerate() {
        write_apt(&dir.join(format!("{i}.apt")), ind)?;
        write_png(&dir.join(format!("{i}.png")), pixels, width, height)?;
    }
    Ok(())
}
