//! Plain-text decoding with encoding fallback.

use docsift_core::Result;

/// Decode TXT bytes: strict UTF-8 first, Latin-1 as fallback.
///
/// Latin-1 maps every byte to a char, so the fallback cannot fail;
/// legacy single-byte files decode with their letters intact, which is
/// all the downstream heuristics need.
pub fn extract(bytes: &[u8]) -> Result<Option<String>> {
    let text = match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    };

    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        let text = extract("naïve résumé".as_bytes()).unwrap().unwrap();
        assert_eq!(text, "naïve résumé");
    }

    #[test]
    fn latin1_fallback_decodes_every_byte() {
        // "café" encoded as Latin-1: 0xE9 is not valid UTF-8 on its own.
        let text = extract(b"caf\xe9").unwrap().unwrap();
        assert_eq!(text, "café");
    }

    #[test]
    fn whitespace_only_yields_no_text() {
        assert_eq!(extract(b"  \n\t ").unwrap(), None);
        assert_eq!(extract(b"").unwrap(), None);
    }
}
