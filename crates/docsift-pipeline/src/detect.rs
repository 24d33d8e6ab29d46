//! Title, author, and date detection using regex patterns.
//!
//! All three detectors run ordered pattern lists compiled once. Title and
//! author are first-match-wins line scans; dates accumulate every
//! non-overlapping match across the whole text. A miss is an absent or
//! empty value, never an error.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled once, reused for every document.
static AUTHOR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)^author:?\s+(.+)$").unwrap(),
        Regex::new(r"(?i)^by\s+(.+)$").unwrap(),
        Regex::new(r"(?i)^written\s+by\s+(.+)$").unwrap(),
    ]
});

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // YYYY-MM-DD
        Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
        // MM/DD/YYYY
        Regex::new(r"\b\d{2}/\d{2}/\d{4}\b").unwrap(),
        // MM-DD-YYYY
        Regex::new(r"\b\d{2}-\d{2}-\d{4}\b").unwrap(),
        // DD Month YYYY
        Regex::new(&format!(r"(?i)\b\d{{1,2}}\s+(?:{MONTHS})\s+\d{{4}}\b")).unwrap(),
        // Month DD, YYYY
        Regex::new(&format!(r"(?i)\b(?:{MONTHS})\s+\d{{1,2}},?\s+\d{{4}}\b")).unwrap(),
    ]
});

/// First non-blank line that is not an author or date line and fits the
/// length cap. No scoring among candidates.
pub fn detect_title(text: &str, max_title_len: usize) -> Option<String> {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.chars().count() > max_title_len {
            continue;
        }
        if is_author_line(line) || is_entirely_date(line) {
            continue;
        }
        return Some(line.to_string());
    }
    None
}

/// Scan lines for `author:`, `by`, or `written by` markers; first match
/// wins. The captured name loses surrounding punctuation; a capture that
/// trims to nothing does not count as a match.
pub fn detect_author(text: &str) -> Option<String> {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for re in AUTHOR_PATTERNS.iter() {
            if let Some(m) = re.captures(line).and_then(|caps| caps.get(1)) {
                let name = m.as_str().trim_matches(|c: char| !c.is_alphanumeric());
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
    }
    None
}

/// Every date-shaped match in order of appearance, deduplicated by exact
/// string. Matching is by shape only; "February 30, 2024" passes.
pub fn detect_dates(text: &str) -> Vec<String> {
    let mut matches: Vec<(usize, usize, &str)> = Vec::new();
    for re in DATE_PATTERNS.iter() {
        for m in re.find_iter(text) {
            matches.push((m.start(), m.end(), m.as_str()));
        }
    }

    // Sort by position, longest match first for overlapping regions.
    matches.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut seen = HashSet::new();
    let mut dates = Vec::new();
    let mut last_end = 0;
    for (start, end, matched) in matches {
        if start < last_end {
            continue;
        }
        last_end = end;
        if seen.insert(matched) {
            dates.push(matched.to_string());
        }
    }
    dates
}

fn is_author_line(line: &str) -> bool {
    AUTHOR_PATTERNS.iter().any(|re| re.is_match(line))
}

/// True when some date pattern matches the whole line.
fn is_entirely_date(line: &str) -> bool {
    DATE_PATTERNS
        .iter()
        .any(|re| {
            re.find(line)
                .map(|m| m.start() == 0 && m.end() == line.len())
                .unwrap_or(false)
        })
}
