//! Shared fixtures for integration tests.

use image::{DynamicImage, Rgb, RgbImage};
use inkframe::config::{AppConfig, DisplayMode};

/// A solid-color source photo.
pub fn solid_image(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value, value, value])))
}

/// A deterministic color gradient source photo.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) % 256) as u8,
        ])
    }))
}

/// Config for a small test panel.
pub fn panel_config(width: u32, height: u32, mode: DisplayMode) -> AppConfig {
    AppConfig {
        width,
        height,
        mode,
        ..Default::default()
    }
}
