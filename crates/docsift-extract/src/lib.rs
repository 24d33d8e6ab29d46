//! Docsift Extract — decoding document bytes into plain text.
//!
//! Each supported format gets its own module; [`extract_bytes`] dispatches
//! on the detected [`SourceFormat`]. Decoders return `Ok(None)` when a
//! well-formed document simply contains no text (image-only PDF, empty
//! file) and `Err` only for malformed input.

pub mod docx;
pub mod formats;
pub mod pdf;
pub mod text;

pub use formats::{extract_bytes, SourceFormat};
