//! Bit packing and unpacking of quantized grids.
//!
//! The packed layout is shared by both directions and both depths:
//! row-major traversal, pixels grouped into bytes, the first pixel of each
//! group in the most significant bits. Byte alignment resets at every row
//! boundary, so a row whose width is not a multiple of pixels-per-byte ends
//! in a partial byte whose unused low bits are zero.

mod packer;
mod unpacker;

pub use packer::{pack, PackedBuffer};
pub use unpacker::unpack;
