//! Fixed-threshold binarization.

use crate::grid::{PixelGrid, QuantizedGrid};

/// Binarize a grid against a fixed threshold.
///
/// Intensity strictly greater than `threshold` becomes level 1 (white);
/// everything else becomes level 0 (black). No error is diffused and every
/// pixel is independent.
pub(crate) fn threshold(grid: &PixelGrid, threshold: u8) -> QuantizedGrid {
    let data = grid
        .data()
        .iter()
        .map(|&v| u8::from(v > threshold))
        .collect();
    QuantizedGrid::new(data, grid.width(), grid.height(), 2)
}
