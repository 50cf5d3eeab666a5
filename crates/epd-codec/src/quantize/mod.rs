//! Quantization: reduce an 8-bit intensity grid to 2 or 4 display levels.
//!
//! Three mutually exclusive modes are supported:
//!
//! - **Dither**: Floyd-Steinberg error diffusion to evenly spaced levels.
//!   The standard choice for photographic content on a monochrome panel,
//!   and generalized here over the level count.
//! - **Threshold**: fixed-threshold binarization, monochrome only.
//! - **Uniform**: bucketed quantization, the 4-level-gray path.
//!
//! The level count is validated before any pixel work begins.

mod error_diffusion;
mod kernel;
mod threshold;
mod uniform;

pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::error::CodecError;
use crate::format::BitDepth;
use crate::grid::{PixelGrid, QuantizedGrid};

/// Quantization mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantizeMode {
    /// Floyd-Steinberg error diffusion to evenly spaced levels.
    Dither,
    /// Fixed-threshold binarization: intensity above the threshold becomes
    /// white (level 1). Monochrome only.
    Threshold(u8),
    /// Uniform intensity buckets: `level = v * levels / 256`.
    Uniform,
}

/// Quantize a grid to `levels` output levels.
///
/// # Errors
///
/// [`CodecError::UnsupportedLevels`] if `levels` is not 2 or 4, or if
/// [`QuantizeMode::Threshold`] is requested with a non-monochrome level
/// count. Raised before any pixel is touched.
pub fn quantize(
    grid: &PixelGrid,
    levels: u8,
    mode: QuantizeMode,
) -> Result<QuantizedGrid, CodecError> {
    BitDepth::from_levels(levels)?;

    match mode {
        QuantizeMode::Dither => Ok(error_diffusion::dither(grid, levels)),
        QuantizeMode::Threshold(t) => {
            if levels != 2 {
                return Err(CodecError::UnsupportedLevels { levels });
            }
            Ok(threshold::threshold(grid, t))
        }
        QuantizeMode::Uniform => Ok(uniform::uniform(grid, levels)),
    }
}

/// Map a level index back to a display intensity.
///
/// Levels spread evenly over 0-255: `level * 255 / (levels - 1)`, so the
/// 4-level intensities are 0, 85, 170, 255 and the monochrome ones 0, 255.
#[inline]
pub fn level_to_intensity(level: u8, levels: u8) -> u8 {
    debug_assert!(levels > 1 && level < levels);
    (level as u16 * 255 / (levels - 1) as u16) as u8
}
