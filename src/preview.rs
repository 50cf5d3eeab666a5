//! Preview emission: intensity grids to PNG files.

use std::path::Path;

use epd_codec::PixelGrid;
use image::GrayImage;

use crate::error::AppError;

/// Convert an intensity grid to an 8-bit grayscale image.
pub fn to_gray_image(grid: &PixelGrid) -> GrayImage {
    GrayImage::from_raw(grid.width() as u32, grid.height() as u32, grid.data().to_vec())
        .expect("grid length matches its dimensions")
}

/// Write an intensity grid to `path` as a PNG.
pub fn save_png(grid: &PixelGrid, path: &Path) -> Result<(), AppError> {
    to_gray_image(grid)
        .save(path)
        .map_err(|e| AppError::PreviewEncode(e.to_string()))?;
    tracing::info!(path = %path.display(), "Preview written");
    Ok(())
}
