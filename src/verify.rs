//! Verification: read exported data back and reconstruct a viewable image.
//!
//! Three input shapes are accepted, tried in order:
//!
//! 1. container files (EPDB magic) carry their own geometry and depth,
//! 2. text files are scraped for `0xHH` tokens in order of appearance --
//!    the legacy header-file format. It has no length field or checksum,
//!    so any two-hex-digit `0x` token anywhere in the file is
//!    indistinguishable from data; kept for compatibility only,
//! 3. anything else is taken as raw packed bytes.
//!
//! For raw and scraped inputs the buffer length alone selects the decode
//! mode; a length matching neither expected size is an error unless the
//! caller pins the depth, in which case the deliberate truncate/short
//! policies apply.

use std::path::Path;
use std::sync::OnceLock;

use epd_codec::{unpack, BitDepth, PixelGrid};
use regex::Regex;

use crate::error::AppError;
use crate::export::container;

/// Data recovered from a verification input file.
#[derive(Debug)]
pub enum Payload {
    /// A container file: self-describing geometry and depth.
    Container {
        header: container::ContainerHeader,
        bytes: Vec<u8>,
    },
    /// Raw packed bytes, from a binary file or a hex-token scrape.
    Raw(Vec<u8>),
}

/// A decoded verification image.
#[derive(Debug)]
pub struct DecodedImage {
    pub grid: PixelGrid,
    pub depth: BitDepth,
}

/// Read a verification input file into a byte payload.
pub fn read_payload(path: &Path) -> Result<Payload, AppError> {
    let bytes = std::fs::read(path)?;

    if container::is_container(&bytes) {
        let (header, payload) = container::decode(&bytes)?;
        return Ok(Payload::Container {
            header,
            bytes: payload.to_vec(),
        });
    }

    if let Ok(text) = std::str::from_utf8(&bytes) {
        let scraped = extract_hex_tokens(text);
        if !scraped.is_empty() {
            tracing::debug!(tokens = scraped.len(), "Scraped hex tokens from text input");
            return Ok(Payload::Raw(scraped));
        }
    }

    Ok(Payload::Raw(bytes))
}

/// Extract every `0xHH` token from `text`, in order of appearance.
pub fn extract_hex_tokens(text: &str) -> Vec<u8> {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    let token = TOKEN.get_or_init(|| Regex::new(r"0x[0-9A-Fa-f]{2}").expect("valid literal regex"));
    token
        .find_iter(text)
        .map(|m| u8::from_str_radix(&m.as_str()[2..], 16).expect("regex matched two hex digits"))
        .collect()
}

/// Decode a payload into a display-intensity grid.
///
/// Container payloads decode from their own header; the configured panel
/// geometry applies to raw payloads only. `forced_depth` overrides the
/// length discrimination for raw payloads: a longer buffer is silently
/// truncated to the expected size and a shorter one decodes as far as it
/// reaches, each with a logged advisory.
pub fn decode_payload(
    payload: Payload,
    width: usize,
    height: usize,
    forced_depth: Option<BitDepth>,
) -> Result<DecodedImage, AppError> {
    let (bytes, width, height, depth) = match payload {
        Payload::Container { header, bytes } => {
            (bytes, header.width, header.height, header.depth)
        }
        Payload::Raw(bytes) => {
            let depth = match forced_depth {
                Some(depth) => {
                    report_length_advisory(bytes.len(), width, height, depth);
                    depth
                }
                None => BitDepth::from_len(bytes.len(), width, height)?,
            };
            (bytes, width, height, depth)
        }
    };

    let grid = unpack(&bytes, width, height, depth);
    Ok(DecodedImage { grid, depth })
}

fn report_length_advisory(actual: usize, width: usize, height: usize, depth: BitDepth) {
    let expected = depth.expected_len(width, height);
    if actual > expected {
        tracing::warn!(actual, expected, "Buffer longer than expected, truncating");
    } else if actual < expected {
        tracing::warn!(actual, expected, "Buffer shorter than expected, decoding short");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epd_codec::CodecError;

    #[test]
    fn test_extract_hex_tokens_in_order() {
        let text = "const unsigned char img[4] = {\n    0xDE, 0xAD,\n    0xBE, 0xEF,\n};";
        assert_eq!(extract_hex_tokens(text), vec![0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_extract_hex_tokens_is_greedy_about_context() {
        // The legacy format has no framing: a hex-looking token in a
        // comment is scraped like any data byte. Documented brittleness.
        let text = "// written at 0xCA fe\n0x01,";
        assert_eq!(extract_hex_tokens(text), vec![0xCA, 0x01]);
    }

    #[test]
    fn test_extract_hex_tokens_takes_two_digit_prefix_of_longer_runs() {
        // "0x1234" contributes its first two digits; longer runs are not
        // valid data bytes anyway
        assert_eq!(extract_hex_tokens("0x1234"), vec![0x12]);
    }

    #[test]
    fn test_extract_ignores_non_tokens() {
        assert!(extract_hex_tokens("no data here, 0xZ1, 0x-").is_empty());
    }

    #[test]
    fn test_decode_raw_discriminates_by_length() {
        // 8x2 mono = 2 bytes
        let decoded =
            decode_payload(Payload::Raw(vec![0xFF, 0x00]), 8, 2, None).unwrap();
        assert_eq!(decoded.depth, BitDepth::Mono);
        assert_eq!(&decoded.grid.data()[..8], &[0; 8]);
        assert_eq!(&decoded.grid.data()[8..], &[255; 8]);

        // 8x2 gray = 4 bytes
        let decoded =
            decode_payload(Payload::Raw(vec![0xAA; 4]), 8, 2, None).unwrap();
        assert_eq!(decoded.depth, BitDepth::Gray4);
        assert!(decoded.grid.data().iter().all(|&v| v == 170));
    }

    #[test]
    fn test_decode_raw_unknown_length_is_error() {
        let result = decode_payload(Payload::Raw(vec![0u8; 3]), 8, 2, None);
        assert!(matches!(
            result,
            Err(AppError::Codec(CodecError::SizeMismatch { actual: 3, .. }))
        ));
    }

    #[test]
    fn test_decode_forced_depth_tolerates_wrong_length() {
        // Longer than expected: decodes from the truncated prefix
        let decoded = decode_payload(
            Payload::Raw(vec![0x00; 10]),
            8,
            2,
            Some(BitDepth::Mono),
        )
        .unwrap();
        assert!(decoded.grid.data().iter().all(|&v| v == 255));

        // Shorter: decodes what exists, rest stays white
        let decoded = decode_payload(
            Payload::Raw(vec![0xFF]),
            8,
            2,
            Some(BitDepth::Mono),
        )
        .unwrap();
        assert_eq!(&decoded.grid.data()[..8], &[0; 8]);
        assert_eq!(&decoded.grid.data()[8..], &[255; 8]);
    }

    #[test]
    fn test_decode_container_uses_header_geometry() {
        use epd_codec::{pack, QuantizedGrid};

        let buffer = pack(&QuantizedGrid::new(vec![0, 1, 2, 3], 4, 1, 4)).unwrap();
        let encoded = crate::export::container::encode(&buffer);
        let payload = read_payload_from_bytes(&encoded);

        // Deliberately wrong CLI geometry: the header must win
        let decoded = decode_payload(payload, 999, 999, None).unwrap();
        assert_eq!(decoded.depth, BitDepth::Gray4);
        assert_eq!(decoded.grid.data(), &[0, 85, 170, 255]);
    }

    /// Test helper mirroring read_payload without touching the filesystem.
    fn read_payload_from_bytes(bytes: &[u8]) -> Payload {
        if crate::export::container::is_container(bytes) {
            let (header, payload) = crate::export::container::decode(bytes).unwrap();
            Payload::Container {
                header,
                bytes: payload.to_vec(),
            }
        } else {
            Payload::Raw(bytes.to_vec())
        }
    }
}
