use std::path::Path;

use epd_codec::BitDepth;
use serde::Deserialize;

use crate::error::ConfigError;

/// Application configuration loaded from config.yaml.
///
/// Every field has a default for the stock 400x300 panel, so an absent or
/// partial file still yields a usable configuration. The loaded value is immutable for the duration of a run
/// and threaded explicitly into each stage call.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Panel width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Panel height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Display mode: monochrome or 4-level gray
    #[serde(default)]
    pub mode: DisplayMode,

    /// Gray level count (gray mode only)
    #[serde(default = "default_levels")]
    pub levels: u8,

    /// Whether monochrome conversion uses Floyd-Steinberg dithering
    #[serde(default = "default_dithering")]
    pub dithering: bool,

    /// Binarization threshold, used only when dithering is off
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Brightness factor for the dithered path
    #[serde(default = "default_brightness")]
    pub brightness: f32,

    /// Contrast factor for the dithered path
    #[serde(default = "default_contrast")]
    pub contrast: f32,

    /// C-array output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Display mode of the target panel.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// 1-bit monochrome
    #[default]
    Bw,
    /// 2-bit, 4-level gray
    Gray,
}

/// Settings for the C-array source listing.
#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Variable name of the emitted array
    #[serde(default = "default_var_name")]
    pub var_name: String,

    /// Hex values per line
    #[serde(default = "default_bytes_per_line")]
    pub bytes_per_line: usize,
}

fn default_width() -> u32 {
    400
}

fn default_height() -> u32 {
    300
}

fn default_levels() -> u8 {
    4
}

fn default_dithering() -> bool {
    true
}

fn default_threshold() -> u8 {
    128
}

fn default_brightness() -> f32 {
    0.75
}

fn default_contrast() -> f32 {
    1.2
}

fn default_var_name() -> String {
    "epaper_image".to_string()
}

fn default_bytes_per_line() -> usize {
    16
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            var_name: default_var_name(),
            bytes_per_line: default_bytes_per_line(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            mode: DisplayMode::default(),
            levels: default_levels(),
            dithering: default_dithering(),
            threshold: default_threshold(),
            brightness: default_brightness(),
            contrast: default_contrast(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional YAML file.
    ///
    /// With no path the defaults are used. A named file that cannot be read
    /// or parsed is an error: the caller asked for that specific file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| {
                    ConfigError::Read {
                        path: path.display().to_string(),
                        source,
                    }
                })?;
                let config: Self =
                    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                        path: path.display().to_string(),
                        source,
                    })?;
                tracing::info!(path = %path.display(), "Loaded configuration");
                config
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate ranges the codec assumes the caller has checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.mode == DisplayMode::Gray && !matches!(self.levels, 2 | 4) {
            return Err(ConfigError::InvalidLevels {
                levels: self.levels,
            });
        }
        if !self.brightness.is_finite() || self.brightness <= 0.0 {
            return Err(ConfigError::InvalidFactor {
                name: "brightness",
                value: self.brightness,
            });
        }
        if !self.contrast.is_finite() || self.contrast <= 0.0 {
            return Err(ConfigError::InvalidFactor {
                name: "contrast",
                value: self.contrast,
            });
        }
        if self.output.bytes_per_line == 0 {
            return Err(ConfigError::InvalidBytesPerLine);
        }
        Ok(())
    }

    /// Effective level count for the configured mode.
    pub fn effective_levels(&self) -> u8 {
        match self.mode {
            DisplayMode::Bw => 2,
            DisplayMode::Gray => self.levels,
        }
    }

    /// Packed bit depth for the configured mode.
    pub fn bit_depth(&self) -> BitDepth {
        match self.mode {
            DisplayMode::Bw => BitDepth::Mono,
            // validate() has pinned levels to {2,4}
            DisplayMode::Gray if self.levels == 2 => BitDepth::Mono,
            DisplayMode::Gray => BitDepth::Gray4,
        }
    }
}
