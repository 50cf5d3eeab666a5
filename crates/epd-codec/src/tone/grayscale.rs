//! Color-to-intensity reduction.

use image::RgbImage;

use crate::grid::PixelGrid;

/// Reduce an RGB raster to a single-channel intensity grid.
///
/// Uses the ITU-R BT.601 luma weights in integer arithmetic:
/// `(299 R + 587 G + 114 B) / 1000`. An input that is already gray
/// (R = G = B) passes through unchanged, since the weights sum to 1000.
pub fn to_grayscale(image: &RgbImage) -> PixelGrid {
    let (width, height) = image.dimensions();
    let data = image
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
        })
        .collect();
    PixelGrid::new(data, width as usize, height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_gray_input_passes_through() {
        for value in [0u8, 1, 85, 128, 254, 255] {
            let image = RgbImage::from_pixel(2, 2, Rgb([value, value, value]));
            let grid = to_grayscale(&image);
            assert!(grid.data().iter().all(|&v| v == value), "value {value}");
        }
    }

    #[test]
    fn test_luma_weights() {
        let red = RgbImage::from_pixel(1, 1, Rgb([255, 0, 0]));
        let green = RgbImage::from_pixel(1, 1, Rgb([0, 255, 0]));
        let blue = RgbImage::from_pixel(1, 1, Rgb([0, 0, 255]));

        assert_eq!(to_grayscale(&red).get(0, 0), 76); // 255*299/1000
        assert_eq!(to_grayscale(&green).get(0, 0), 149); // 255*587/1000
        assert_eq!(to_grayscale(&blue).get(0, 0), 29); // 255*114/1000
    }

    #[test]
    fn test_dimensions_preserved() {
        let image = RgbImage::new(7, 3);
        let grid = to_grayscale(&image);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
    }
}
