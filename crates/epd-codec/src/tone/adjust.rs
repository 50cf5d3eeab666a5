//! Brightness and contrast adjustment.

use crate::grid::PixelGrid;

/// Adjust contrast then brightness, returning a new grid.
///
/// Contrast scales each sample's deviation from the fixed midpoint 128 by
/// `contrast`; brightness then multiplies the recentered value by
/// `brightness`. Both steps clamp into 0-255. The order is fixed: contrast
/// is applied before brightness, matching how the conversion pipeline feeds
/// the dithered quantization path.
pub fn adjust(grid: &PixelGrid, brightness: f32, contrast: f32) -> PixelGrid {
    let data = grid
        .data()
        .iter()
        .map(|&v| {
            let contrasted = 128.0 + (v as f32 - 128.0) * contrast;
            let brightened = contrasted.clamp(0.0, 255.0) * brightness;
            brightened.clamp(0.0, 255.0).round() as u8
        })
        .collect();
    PixelGrid::new(data, grid.width(), grid.height())
}
