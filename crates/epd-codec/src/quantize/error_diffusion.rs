//! Floyd-Steinberg error diffusion quantization.

use crate::grid::{PixelGrid, QuantizedGrid};
use crate::quantize::kernel::FLOYD_STEINBERG;

/// Quantize a grid to `levels` evenly spaced output levels with
/// Floyd-Steinberg error diffusion.
///
/// The pass is a single strict forward traversal, row-major and
/// left-to-right; each pixel's effective intensity depends on all earlier
/// pixels in its row and the row above, so the traversal order is part of
/// the output contract (never serpentine, never parallel). The quantization
/// error of each pixel is diffused to its four unvisited neighbors with the
/// canonical 7/16, 3/16, 5/16, 1/16 weights.
///
/// Error arithmetic runs on a private i16 working copy so accumulated error
/// can go negative or exceed 255 between pixels; the input grid is never
/// mutated.
pub(crate) fn dither(grid: &PixelGrid, levels: u8) -> QuantizedGrid {
    let width = grid.width();
    let height = grid.height();
    let step = 255 / (levels - 1) as i16;

    let mut buffer: Vec<i16> = grid.data().iter().map(|&v| v as i16).collect();
    let mut output = vec![0u8; width * height];

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = buffer[idx];

            let level = closest_level(old, levels, step);
            let error = old - level as i16 * step;
            output[idx] = level;

            for &(dx, dy, weight) in FLOYD_STEINBERG.entries {
                let nx = x as i32 + dx;
                let ny = y + dy as usize;
                if nx >= 0 && (nx as usize) < width && ny < height {
                    buffer[ny * width + nx as usize] +=
                        error * weight as i16 / FLOYD_STEINBERG.divisor as i16;
                }
            }
        }
    }

    QuantizedGrid::new(output, width, height, levels)
}

/// Nearest of `levels` evenly spaced levels for a (possibly error-shifted)
/// intensity.
#[inline]
fn closest_level(value: i16, levels: u8, step: i16) -> u8 {
    let clamped = value.clamp(0, 255);
    ((clamped + step / 2) / step).min((levels - 1) as i16) as u8
}
