//! PDF text-layer extraction.
//!
//! Pulls the embedded text layer out of digital-native PDFs. Scanned
//! (image-only) PDFs carry no text layer and come back as `Ok(None)`;
//! recovering those would need OCR, which Docsift does not ship.

use docsift_core::{Error, Result};

/// Extract the text layer from PDF bytes.
pub fn extract(bytes: &[u8]) -> Result<Option<String>> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| Error::Extract(format!("pdf: {e}")))?;

    if text.trim().is_empty() {
        tracing::warn!("pdf has no text layer (image-only? OCR not supported)");
        return Ok(None);
    }
    Ok(Some(text))
}
