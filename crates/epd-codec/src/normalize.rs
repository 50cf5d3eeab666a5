//! Geometric normalization: cover-fit resize plus center crop.
//!
//! Arbitrary-size input rasters are scaled so they fully cover the target
//! rectangle, then center-cropped to exactly the panel dimensions. The
//! normalizer never letterboxes and never pads.

use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::error::CodecError;

/// Resize and crop `image` to exactly `target_w` x `target_h`.
///
/// Cover-fit: `scale = max(target_w / w, target_h / h)`, Lanczos3 resample
/// to the rounded scaled dimensions, then a centered crop with floor
/// offsets. The rounded dimensions are clamped up to the target so a
/// half-pixel rounding shortfall can never leave a side short of the crop.
///
/// # Errors
///
/// [`CodecError::EmptyImage`] if the source has zero area. Target
/// dimensions are assumed `> 0` (validated by the caller's configuration).
pub fn normalize(
    image: &RgbImage,
    target_w: u32,
    target_h: u32,
) -> Result<RgbImage, CodecError> {
    let (orig_w, orig_h) = image.dimensions();
    if orig_w == 0 || orig_h == 0 {
        return Err(CodecError::EmptyImage {
            width: orig_w,
            height: orig_h,
        });
    }

    if (orig_w, orig_h) == (target_w, target_h) {
        return Ok(image.clone());
    }

    let scale = f64::max(
        target_w as f64 / orig_w as f64,
        target_h as f64 / orig_h as f64,
    );
    let scaled_w = ((orig_w as f64 * scale).round() as u32).max(target_w);
    let scaled_h = ((orig_h as f64 * scale).round() as u32).max(target_h);

    let scaled = imageops::resize(image, scaled_w, scaled_h, FilterType::Lanczos3);

    // Integer division floors the offset; the clamp above guarantees it is
    // in range, so the crop never reads outside the scaled image.
    let left = (scaled_w - target_w) / 2;
    let top = (scaled_h - target_h) / 2;

    Ok(imageops::crop_imm(&scaled, left, top, target_w, target_h).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([value, value, value]))
    }

    #[test]
    fn test_output_dimensions_wide_input() {
        let out = normalize(&solid(800, 300, 100), 400, 300).unwrap();
        assert_eq!(out.dimensions(), (400, 300));
    }

    #[test]
    fn test_output_dimensions_tall_input() {
        let out = normalize(&solid(400, 900, 100), 400, 300).unwrap();
        assert_eq!(out.dimensions(), (400, 300));
    }

    #[test]
    fn test_output_dimensions_upscale() {
        // Smaller than target in both axes: cover-fit scales up
        let out = normalize(&solid(100, 50, 100), 400, 300).unwrap();
        assert_eq!(out.dimensions(), (400, 300));
    }

    #[test]
    fn test_exact_size_passthrough() {
        let input = solid(400, 300, 77);
        let out = normalize(&input, 400, 300).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn test_awkward_aspect_ratios_never_short() {
        // Odd dimensions exercise the rounding clamp; output must always be
        // exactly the target, never padded and never short.
        for &(w, h) in &[(401, 301), (399, 299), (123, 457), (1000, 3), (3, 1000)] {
            let out = normalize(&solid(w, h, 128), 400, 300).unwrap();
            assert_eq!(out.dimensions(), (400, 300), "input {w}x{h}");
        }
    }

    #[test]
    fn test_solid_input_stays_solid() {
        // Resampling a uniform image must not introduce borders or ringing
        let out = normalize(&solid(800, 600, 128), 400, 300).unwrap();
        assert!(out.pixels().all(|p| p.0 == [128, 128, 128]));
    }

    #[test]
    fn test_zero_area_rejected() {
        let empty = RgbImage::new(0, 300);
        assert!(matches!(
            normalize(&empty, 400, 300),
            Err(CodecError::EmptyImage {
                width: 0,
                height: 300
            })
        ));
    }
}
