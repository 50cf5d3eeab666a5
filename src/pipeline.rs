//! The conversion pipeline: photograph in, packed buffer out.
//!
//! Stages run strictly in order: normalize -> tone map -> quantize -> pack.
//! Grids are transient within a call; the [`PackedBuffer`] is the only
//! artifact that escapes, together with a preview grid for the operator.

use epd_codec::{
    adjust, normalize, pack, quantize, to_grayscale, PackedBuffer, PixelGrid, QuantizeMode,
    QuantizedGrid,
};
use image::DynamicImage;

use crate::config::{AppConfig, DisplayMode};
use crate::error::AppError;

/// Result of one conversion call.
pub struct Conversion {
    /// The packed display buffer.
    pub packed: PackedBuffer,
    /// The quantized image mapped back to display intensities, for preview.
    pub preview: PixelGrid,
}

/// Convert a decoded image into a packed e-paper buffer.
///
/// Tone adjustment (contrast, then brightness) runs only on the dithered
/// monochrome path; the threshold and uniform-gray paths consume the raw
/// luma. The asymmetry is deliberate and load-bearing for byte-exact
/// output compatibility (see DESIGN.md).
pub fn convert(image: &DynamicImage, config: &AppConfig) -> Result<Conversion, AppError> {
    let rgb = image.to_rgb8();
    tracing::debug!(
        width = rgb.width(),
        height = rgb.height(),
        "Source image decoded"
    );

    let normalized = normalize(&rgb, config.width, config.height)?;
    let gray = to_grayscale(&normalized);

    let quantized = quantize_stage(&gray, config)?;
    let preview = quantized.to_display();
    let packed = pack(&quantized)?;

    tracing::info!(
        width = config.width,
        height = config.height,
        mode = ?config.mode,
        bytes = packed.len(),
        "Conversion complete"
    );

    Ok(Conversion { packed, preview })
}

fn quantize_stage(gray: &PixelGrid, config: &AppConfig) -> Result<QuantizedGrid, AppError> {
    let levels = config.effective_levels();
    let quantized = match config.mode {
        DisplayMode::Gray => quantize(gray, levels, QuantizeMode::Uniform)?,
        DisplayMode::Bw if config.dithering => {
            let adjusted = adjust(gray, config.brightness, config.contrast);
            quantize(&adjusted, levels, QuantizeMode::Dither)?
        }
        DisplayMode::Bw => quantize(gray, levels, QuantizeMode::Threshold(config.threshold))?,
    };
    Ok(quantized)
}
