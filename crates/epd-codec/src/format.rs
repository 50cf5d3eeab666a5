//! Packed-buffer bit depths for the two supported display formats.

use crate::error::CodecError;

/// Bit depth of a packed e-paper buffer.
///
/// The codec deliberately special-cases the 1-bit and 2-bit layouts rather
/// than generalizing to an N-bit packer; these are the only formats the
/// target display controllers accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// 1 bit per pixel, monochrome. 8 pixels per byte.
    Mono,
    /// 2 bits per pixel, 4-level gray. 4 pixels per byte.
    Gray4,
}

impl BitDepth {
    /// Bits used to encode one pixel's quantized level.
    #[inline]
    pub fn bits_per_pixel(self) -> usize {
        match self {
            BitDepth::Mono => 1,
            BitDepth::Gray4 => 2,
        }
    }

    /// Pixels packed into each byte (8 for 1-bit, 4 for 2-bit).
    #[inline]
    pub fn pixels_per_byte(self) -> usize {
        8 / self.bits_per_pixel()
    }

    /// Number of quantization levels this depth can represent.
    #[inline]
    pub fn level_count(self) -> u8 {
        match self {
            BitDepth::Mono => 2,
            BitDepth::Gray4 => 4,
        }
    }

    /// Exact packed length for a `width` x `height` grid.
    ///
    /// Row boundaries are byte-aligned, so each row contributes
    /// `ceil(width / pixels_per_byte)` bytes regardless of content.
    #[inline]
    pub fn expected_len(self, width: usize, height: usize) -> usize {
        width.div_ceil(self.pixels_per_byte()) * height
    }

    /// Map a quantization level count to its bit depth.
    pub fn from_levels(levels: u8) -> Result<Self, CodecError> {
        match levels {
            2 => Ok(BitDepth::Mono),
            4 => Ok(BitDepth::Gray4),
            _ => Err(CodecError::UnsupportedLevels { levels }),
        }
    }

    /// Select the decode mode from a buffer length.
    ///
    /// The length is the sole format discriminator: there is no embedded
    /// header in a raw packed buffer. Any length other than the two expected
    /// sizes for this geometry is a [`CodecError::SizeMismatch`].
    pub fn from_len(len: usize, width: usize, height: usize) -> Result<Self, CodecError> {
        let expected_mono = BitDepth::Mono.expected_len(width, height);
        let expected_gray = BitDepth::Gray4.expected_len(width, height);
        if len == expected_mono {
            Ok(BitDepth::Mono)
        } else if len == expected_gray {
            Ok(BitDepth::Gray4)
        } else {
            Err(CodecError::SizeMismatch {
                actual: len,
                expected_mono,
                expected_gray,
                width,
                height,
            })
        }
    }
}
