//! Source format detection and extraction dispatch.

use docsift_core::Result;

use crate::{docx, pdf, text};

/// Supported document formats for text extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    Docx,
    Txt,
}

impl SourceFormat {
    /// Detect format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Detect format from a filename.
    pub fn from_filename(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Lowercase label for logging and API responses.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }

    /// All formats the extractor understands, for capability listings.
    pub fn all() -> &'static [SourceFormat] {
        &[Self::Pdf, Self::Docx, Self::Txt]
    }
}

/// Extract text content from raw document bytes.
///
/// `Ok(None)` means the document decoded but yielded no text.
pub fn extract_bytes(bytes: &[u8], format: SourceFormat) -> Result<Option<String>> {
    match format {
        SourceFormat::Pdf => pdf::extract(bytes),
        SourceFormat::Docx => docx::extract(bytes),
        SourceFormat::Txt => text::extract(bytes),
    }
}
