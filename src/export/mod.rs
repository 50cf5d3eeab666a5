//! Export writers for the packed buffer.
//!
//! Three artifact formats leave the converter:
//!
//! - a C source listing declaring the buffer as a byte array (the format
//!   firmware projects paste into a header file),
//! - the raw packed bytes, written verbatim,
//! - a small length-tagged container for integrations that need a
//!   self-describing file (see [`container`]).

pub mod c_array;
pub mod container;
