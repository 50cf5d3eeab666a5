//! Error taxonomy for the codec.
//!
//! All failures surface synchronously to the immediate caller; there is no
//! retry anywhere in the codec. The deliberate truncation/zero-fill policies
//! of the packed format (see [`crate::pack`]) are format behaviors, not
//! errors, and never appear here.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The source raster has zero area and cannot be normalized.
    #[error("source image has zero area ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A level count outside the two supported display formats was requested.
    /// Raised before any pixel work begins.
    #[error("unsupported grayscale level count {levels} (expected 2 or 4)")]
    UnsupportedLevels { levels: u8 },

    /// A verification buffer matches neither of the two expected sizes for
    /// the panel geometry. The length is the sole format discriminator, so
    /// nothing can be decoded from a buffer of any other length.
    #[error(
        "buffer of {actual} bytes matches neither {expected_mono} (1-bit) \
         nor {expected_gray} (2-bit) for {width}x{height}"
    )]
    SizeMismatch {
        actual: usize,
        expected_mono: usize,
        expected_gray: usize,
        width: usize,
        height: usize,
    },
}
