//! DOCX text extraction.
//!
//! A DOCX file is a zip container; the document body lives in
//! `word/document.xml`. Text sits in `<w:t>` runs, paragraphs end at
//! `</w:p>`, and explicit breaks appear as `<w:br/>`/`<w:cr/>`. Table
//! cells hold ordinary `<w:p>` paragraphs, so table text is collected
//! without special handling.

use std::io::{Cursor, Read};

use docsift_core::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Extract plain text from DOCX bytes.
pub fn extract(bytes: &[u8]) -> Result<Option<String>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::Extract(format!("docx: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::Extract(format!("docx: {e}")))?
        .read_to_string(&mut xml)?;

    let text = document_text(&xml)?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(text))
}

/// Walk the XML event stream collecting run text.
fn document_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:br" | b"w:cr" => out.push('\n'),
                b"w:tab" => out.push('\t'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_run_text => {
                let run = t
                    .unescape()
                    .map_err(|e| Error::Extract(format!("docx xml: {e}")))?;
                out.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(Error::Extract(format!("docx xml: {e}"))),
        }
    }

    Ok(out)
}
