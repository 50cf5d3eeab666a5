//! Reconstruction of a displayable intensity grid from packed bytes.

use crate::format::BitDepth;
use crate::grid::PixelGrid;

/// Decode a packed buffer back into a display-intensity grid.
///
/// The exact inverse of [`pack`](crate::pack::pack): bytes are consumed
/// row-major, pixels extracted most-significant-bits-first. A 1-bit set bit
/// means black (intensity 0), a clear bit white (255), mirroring the
/// packer's is-black encoding. A 2-bit level maps to `level * 85`.
///
/// Length policies are format behavior, not errors: a buffer longer than
/// the geometry requires is consumed only up to the expected length, and a
/// short buffer decodes as far as it reaches, leaving the remaining pixels
/// white. Reporting a size mismatch is the verification caller's concern.
pub fn unpack(buffer: &[u8], width: usize, height: usize, depth: BitDepth) -> PixelGrid {
    let ppb = depth.pixels_per_byte();
    let bpp = depth.bits_per_pixel();
    let expected = depth.expected_len(width, height);
    let bytes = &buffer[..buffer.len().min(expected)];

    let mut grid = vec![255u8; width * height];
    let mut byte_idx = 0;

    'rows: for y in 0..height {
        for chunk_x in (0..width).step_by(ppb) {
            if byte_idx >= bytes.len() {
                break 'rows;
            }
            let byte = bytes[byte_idx];
            byte_idx += 1;

            for i in 0..ppb {
                let x = chunk_x + i;
                if x >= width {
                    break;
                }
                let shift = 8 - bpp * (i + 1);
                grid[y * width + x] = match depth {
                    BitDepth::Mono => {
                        if (byte >> shift) & 1 == 1 {
                            0
                        } else {
                            255
                        }
                    }
                    BitDepth::Gray4 => ((byte >> shift) & 0b11) * 85,
                };
            }
        }
    }

    PixelGrid::new(grid, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_bit_polarity() {
        // 0b10100000 over 8 pixels: set bits decode black
        let grid = unpack(&[0b1010_0000], 8, 1, BitDepth::Mono);
        assert_eq!(grid.data(), &[0, 255, 0, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn test_gray4_level_intensities() {
        // 00 01 10 11 -> 0, 85, 170, 255
        let grid = unpack(&[0b0001_1011], 4, 1, BitDepth::Gray4);
        assert_eq!(grid.data(), &[0, 85, 170, 255]);
    }

    #[test]
    fn test_partial_row_skips_padding_bits() {
        // W=5: only the top 5 bits carry pixels; padding bits are ignored
        // even when set
        let grid = unpack(&[0b1111_1111], 5, 1, BitDepth::Mono);
        assert_eq!(grid.data(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_short_buffer_decodes_prefix_rest_white() {
        // One byte for a 8x2 mono grid: second row stays white
        let grid = unpack(&[0xFF], 8, 2, BitDepth::Mono);
        assert_eq!(&grid.data()[..8], &[0; 8]);
        assert_eq!(&grid.data()[8..], &[255; 8]);
    }

    #[test]
    fn test_long_buffer_consumes_expected_prefix_only() {
        // 8x1 mono needs 1 byte; the trailing garbage byte must be ignored
        let grid = unpack(&[0x00, 0xFF], 8, 1, BitDepth::Mono);
        assert_eq!(grid.data(), &[255; 8]);
    }

    #[test]
    fn test_empty_buffer_all_white() {
        let grid = unpack(&[], 4, 4, BitDepth::Mono);
        assert!(grid.data().iter().all(|&v| v == 255));
    }
}
