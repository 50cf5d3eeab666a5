//! epd-codec: image-to-bitmap codec for e-paper displays
//!
//! This library converts continuous-tone images into the packed byte buffers
//! consumed by monochrome (1-bit) and 4-level-gray (2-bit) electrophoretic
//! display controllers, and decodes those buffers back into viewable
//! intensity grids for verification.
//!
//! # Pipeline
//!
//! ```text
//! RgbImage (any size)
//!     |
//!     v
//! normalize()              cover-fit resize + center crop to the panel size
//!     |
//!     v
//! to_grayscale()           BT.601 luma reduction -> PixelGrid
//!     |
//!     v
//! [adjust()]               contrast then brightness (dithered path only)
//!     |
//!     v
//! quantize()               Floyd-Steinberg / threshold / uniform -> QuantizedGrid
//!     |
//!     v
//! pack()                   MSB-first row-major bit packing -> PackedBuffer
//! ```
//!
//! The decoder ([`unpack`]) is an independent inverse consumer of the packed
//! bytes; it reconstructs a display-intensity [`PixelGrid`], not the original
//! photograph.
//!
//! # Quick Start
//!
//! ```
//! use epd_codec::{pack, quantize, to_grayscale, BitDepth, QuantizeMode};
//! use image::RgbImage;
//!
//! let rgb = RgbImage::from_pixel(8, 2, image::Rgb([128, 128, 128]));
//! let gray = to_grayscale(&rgb);
//! let quantized = quantize(&gray, 4, QuantizeMode::Uniform).unwrap();
//! let packed = pack(&quantized).unwrap();
//!
//! assert_eq!(packed.depth(), BitDepth::Gray4);
//! assert_eq!(packed.len(), 2 * 2); // ceil(8/4) bytes per row, 2 rows
//! ```
//!
//! # Invariants
//!
//! - Every [`QuantizedGrid`] cell is `< levels`, levels in {2, 4}.
//! - Packed length is `ceil(W / pixels_per_byte) * H`, independent of pixel
//!   content; rows never share a byte, and unused low bits of a row's final
//!   byte are zero.
//! - The 1-bit format encodes *is-black*: a quantized level of 0 (black)
//!   sets its bit to 1. The 2-bit format stores the raw level.
//! - The dithering pass is a strict forward row-major traversal; its output
//!   is deterministic for a fixed input.

pub mod error;
pub mod format;
pub mod grid;
pub mod normalize;
pub mod pack;
pub mod quantize;
pub mod tone;


pub use error::CodecError;
pub use format::BitDepth;
pub use grid::{PixelGrid, QuantizedGrid};
pub use normalize::normalize;
pub use pack::{pack, unpack, PackedBuffer};
pub use quantize::{level_to_intensity, quantize, QuantizeMode};
pub use tone::{adjust, to_grayscale};
