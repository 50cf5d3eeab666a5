//! inkframe: photo to dot-matrix converter for e-paper panels.
//!
//! The heavy lifting lives in the [`epd_codec`] workspace crate; this crate
//! hosts everything around it: configuration, the conversion pipeline,
//! export writers (C array, raw binary, container) and the verification
//! reader that turns exported data back into a viewable image.

pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod preview;
pub mod verify;
