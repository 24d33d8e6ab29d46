//! Extractive summarization.
//!
//! Selects the highest-scoring original sentences and re-emits them in
//! document order. Scores come from keyword-frequency overlap normalized
//! by sentence length, so long sentences get no free advantage. No text
//! is ever generated or rewritten.

use std::collections::HashSet;

use crate::keywords;
use crate::PipelineLimits;

/// Split text into sentences at `.`/`!`/`?` followed by whitespace.
/// Each returned slice is trimmed and keeps its own terminator.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if (b == b'.' || b == b'!' || b == b'?')
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_whitespace()
        {
            let s = text[start..=i].trim();
            if !s.is_empty() {
                sentences.push(s);
            }
            start = i + 1;
        }
    }
    let s = text[start..].trim();
    if !s.is_empty() {
        sentences.push(s);
    }
    sentences
}

/// Summarize `text` by picking up to `summary_sentences` sentences.
///
/// Selection is by score; output is by original position. Sentences at
/// or below `min_sentence_len` chars never become candidates.
pub fn summarize(text: &str, limits: &PipelineLimits) -> String {
    let sentences = split_sentences(text);
    let candidates: Vec<(usize, &str)> = sentences
        .iter()
        .enumerate()
        .filter(|(_, s)| s.chars().count() > limits.min_sentence_len)
        .map(|(i, &s)| (i, s))
        .collect();

    if candidates.is_empty() {
        return String::new();
    }

    let pool: HashSet<String> =
        keywords::rank(text, limits.summary_keyword_pool, limits.min_keyword_len)
            .into_iter()
            .collect();

    // (score, original index, sentence). The sort is stable, so equal
    // scores keep earlier sentences ahead.
    let mut scored: Vec<(f64, usize, &str)> = candidates
        .into_iter()
        .map(|(i, s)| {
            let tokens = keywords::tokenize(s);
            let score = if tokens.is_empty() {
                0.0
            } else {
                let hits = tokens.iter().filter(|t| pool.contains(t.as_str())).count();
                hits as f64 / tokens.len() as f64
            };
            (score, i, s)
        })
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(limits.summary_sentences);

    // Output order is document order, not score order.
    scored.sort_by_key(|&(_, i, _)| i);

    scored
        .iter()
        .map(|&(_, _, s)| s)
        .collect::<Vec<_>>()
        .join(" ")
}
