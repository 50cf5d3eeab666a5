use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("invalid panel dimensions {width}x{height} (both must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid grayscale level count {levels} (expected 2 or 4)")]
    InvalidLevels { levels: u8 },

    #[error("invalid {name} factor {value} (must be > 0)")]
    InvalidFactor { name: &'static str, value: f32 },

    #[error("bytes_per_line must be > 0")]
    InvalidBytesPerLine,
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    #[error("failed to encode preview: {0}")]
    PreviewEncode(String),

    #[error(transparent)]
    Codec(#[from] epd_codec::CodecError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid container data: {0}")]
    Container(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_invalid_dimensions() {
        let error = ConfigError::InvalidDimensions {
            width: 0,
            height: 300,
        };
        assert_eq!(
            error.to_string(),
            "invalid panel dimensions 0x300 (both must be > 0)"
        );
    }

    #[test]
    fn test_config_error_invalid_levels() {
        let error = ConfigError::InvalidLevels { levels: 3 };
        assert_eq!(
            error.to_string(),
            "invalid grayscale level count 3 (expected 2 or 4)"
        );
    }

    #[test]
    fn test_app_error_from_codec_error() {
        let codec = epd_codec::CodecError::UnsupportedLevels { levels: 7 };
        let app: AppError = codec.into();
        match app {
            AppError::Codec(_) => {}
            other => panic!("Expected Codec variant, got {other:?}"),
        }
    }

    #[test]
    fn test_app_error_container_message() {
        let error = AppError::Container("truncated header".to_string());
        assert_eq!(
            error.to_string(),
            "invalid container data: truncated header"
        );
    }
}
