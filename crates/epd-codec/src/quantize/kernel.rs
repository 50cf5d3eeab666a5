//! Error diffusion kernel definition.
//!
//! The kernel specifies how quantization error is distributed to neighboring
//! pixels that have not been processed yet. Only the Floyd-Steinberg kernel
//! is used: its exact four-neighbor weight set is part of the packed output
//! contract, so swapping kernels would change every produced buffer.

/// An error diffusion kernel.
///
/// Each entry is an `(dx, dy, weight)` offset from the current pixel; a
/// neighbor receives `error * weight / divisor`. All offsets point at
/// not-yet-visited pixels of a forward row-major traversal (`dy >= 0`, and
/// `dx > 0` when `dy == 0`).
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16):
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_propagation_100_percent() {
        let sum: u8 = FLOYD_STEINBERG.entries.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, 16, "Floyd-Steinberg weights should sum to 16");
        assert_eq!(
            FLOYD_STEINBERG.divisor, 16,
            "Floyd-Steinberg divisor should be 16"
        );
    }

    #[test]
    fn test_floyd_steinberg_targets_unvisited_pixels() {
        for &(dx, dy, _) in FLOYD_STEINBERG.entries {
            assert!(
                dy > 0 || (dy == 0 && dx > 0),
                "entry ({dx},{dy}) would revisit a processed pixel"
            );
        }
    }

    #[test]
    fn test_floyd_steinberg_entry_count() {
        assert_eq!(
            FLOYD_STEINBERG.entries.len(),
            4,
            "Floyd-Steinberg should have 4 entries"
        );
    }
}
