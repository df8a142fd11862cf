use apt_expressions::{EvalError, Scalar, pixel_coord};
use rayon::prelude::*;

use crate::individual::Individual;
use crate::progress_bars::RenderProgress;

/// Map a channel value from `[-1, 1]` onto a byte. Out-of-range values clamp, NaN becomes 0.
#[inline]
pub fn channel_to_byte(v: Scalar) -> u8 {
    (v * 127.0 + 127.0) as u8
}

/// Row-major RGBA8 pixels (alpha 255) of `individual` at `width x height`.
///
/// Rows are evaluated in parallel, each worker writing only its own row.
pub fn render_rgba(individual: &Individual, width: u32, height: u32) -> Result<Vec<u8>, EvalError> {
    let (w, h) = (width as usize, height as usize);
    let mut buf = vec![0u8; w * h * 4];
    if buf.is_empty() {
        return Ok(buf);
    }
    buf.par_chunks_mut(w * 4)
        .enumerate()
        .try_for_each(|(yi, row)| -> Result<(), EvalError> {
            let y = pixel_coord(yi, h);
            for (xi, px) in row.chunks_exact_mut(4).enumerate() {
                let [r, g, b] = individual.eval(pixel_coord(xi, w), y)?;
                px.copy_from_slice(&[channel_to_byte(r), channel_to_byte(g), channel_to_byte(b), 255]);
            }
            Ok(())
        })?;
    Ok(buf)
}

/// Render every individual in parallel, in order.
pub fn render_population(
    individuals: &[Individual],
    width: u32,
    height: u32,
    show_progress: bool,
) -> Result<Vec<Vec<u8>>, EvalError> {
    let progress = RenderProgress::new(individuals.len(), show_progress);
    let out = individuals
        .par_iter()
        .map(|ind| {
            let pixels = render_rgba(ind, width, height);
            progress.on_picture_done();
            pixels
        })
        .collect();
    progress.finish();
    out
}
