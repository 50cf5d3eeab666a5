//! Length-tagged binary container for packed buffers.
//!
//! The raw packed format has no header, so its length is the only
//! discriminator and a damaged file is indistinguishable from a different
//! geometry. This container adds the minimum self-description for new
//! integrations while the raw and C-array formats remain the compatibility
//! surface:
//!
//! ```text
//! offset  size  field
//! 0       4     magic "EPDB"
//! 4       1     format version (currently 1)
//! 5       1     bits per pixel (1 or 2)
//! 6       2     width, u16 little-endian
//! 8       2     height, u16 little-endian
//! 10      ...   packed payload, exactly expected_len(width, height) bytes
//! ```

use epd_codec::{BitDepth, PackedBuffer};

use crate::error::AppError;

/// File magic of the container format.
pub const MAGIC: [u8; 4] = *b"EPDB";

/// Current container format version.
pub const VERSION: u8 = 1;

const HEADER_LEN: usize = 10;

/// Geometry and depth recovered from a container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub depth: BitDepth,
    pub width: usize,
    pub height: usize,
}

/// Whether `bytes` starts with the container magic.
#[inline]
pub fn is_container(bytes: &[u8]) -> bool {
    bytes.len() >= MAGIC.len() && bytes[..MAGIC.len()] == MAGIC
}

/// Serialize a packed buffer into a container file image.
pub fn encode(buffer: &PackedBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + buffer.len());
    out.extend_from_slice(&MAGIC);
    out.push(VERSION);
    out.push(buffer.depth().bits_per_pixel() as u8);
    out.extend_from_slice(&(buffer.width() as u16).to_le_bytes());
    out.extend_from_slice(&(buffer.height() as u16).to_le_bytes());
    out.extend_from_slice(buffer.bytes());
    out
}

/// Parse a container file image into its header and payload.
///
/// # Errors
///
/// [`AppError::Container`] if the magic, version, depth tag, or payload
/// length is wrong. Unlike the raw format there is no truncation tolerance:
/// a container that disagrees with its own header is corrupt.
pub fn decode(bytes: &[u8]) -> Result<(ContainerHeader, &[u8]), AppError> {
    if !is_container(bytes) {
        return Err(AppError::Container("missing EPDB magic".to_string()));
    }
    if bytes.len() < HEADER_LEN {
        return Err(AppError::Container("truncated header".to_string()));
    }

    let version = bytes[4];
    if version != VERSION {
        return Err(AppError::Container(format!(
            "unsupported version {version} (expected {VERSION})"
        )));
    }

    let depth = match bytes[5] {
        1 => BitDepth::Mono,
        2 => BitDepth::Gray4,
        tag => {
            return Err(AppError::Container(format!(
                "unknown bits-per-pixel tag {tag}"
            )))
        }
    };

    let width = u16::from_le_bytes([bytes[6], bytes[7]]) as usize;
    let height = u16::from_le_bytes([bytes[8], bytes[9]]) as usize;
    let payload = &bytes[HEADER_LEN..];
    let expected = depth.expected_len(width, height);
    if payload.len() != expected {
        return Err(AppError::Container(format!(
            "payload is {} bytes, header implies {expected}",
            payload.len()
        )));
    }

    Ok((
        ContainerHeader {
            depth,
            width,
            height,
        },
        payload,
    ))
}
