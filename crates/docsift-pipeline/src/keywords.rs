//! Frequency-based keyword extraction.
//!
//! Tokenizes text into lowercase alphabetic runs, drops stop words and
//! short tokens, then ranks the rest by descending frequency with ties
//! broken by first occurrence. The summarizer reuses the same tokenizer
//! and ranking to build its scoring pool.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Alphabetic}+").unwrap());

/// Common English words excluded from keyword ranking and summary scoring.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from",
        "has", "he", "in", "is", "it", "its", "of", "on", "that", "the",
        "to", "was", "will", "with", "but", "or", "not", "this", "can",
        "have", "had", "been", "their", "said", "each", "which", "do",
        "how", "if", "who", "what", "where", "when", "why", "all", "any",
        "both", "few", "more", "most", "other", "some", "such",
    ]
    .iter()
    .copied()
    .collect()
});

/// Lowercase word tokens of `text`, in order. Numbers and punctuation
/// never produce tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Rank keywords by descending frequency; ties go to the token that
/// appeared first. Returns at most `max_keywords` entries.
pub fn rank(text: &str, max_keywords: usize, min_len: usize) -> Vec<String> {
    // token → (count, position of first occurrence)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (pos, token) in tokenize(text).into_iter().enumerate() {
        if token.chars().count() < min_len || STOP_WORDS.contains(token.as_str()) {
            continue;
        }
        counts.entry(token).or_insert((0, pos)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first_pos))| (token, count, first_pos))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(max_keywords);

    ranked.into_iter().map(|(token, _, _)| token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_frequency_then_first_occurrence() {
        let ranked = rank("beta alpha beta alpha gamma", 10, 3);
        assert_eq!(ranked, ["beta", "alpha", "gamma"]);
    }

    #[test]
    fn drops_stop_words_and_short_tokens() {
        let ranked = rank("go is box fox the box and", 10, 3);
        assert_eq!(ranked, ["box", "fox"]);
    }

    #[test]
    fn counting_is_case_insensitive() {
        let ranked = rank("Falcon falcon FALCON eagle", 10, 3);
        assert_eq!(ranked, ["falcon", "eagle"]);
    }

    #[test]
    fn numbers_never_tokenize() {
        let ranked = rank("2024 2024 2024 report report", 10, 3);
        assert_eq!(ranked, ["report"]);
    }

    #[test]
    fn truncates_to_the_cap() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let ranked = rank(text, 10, 3);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0], "alpha");
        assert_eq!(ranked[9], "juliet");
    }

    #[test]
    fn no_duplicates_in_output() {
        let ranked = rank("stone stone stone river river stone", 10, 3);
        assert_eq!(ranked, ["stone", "river"]);
    }

    #[test]
    fn unicode_words_stay_whole() {
        assert_eq!(tokenize("café déjà"), ["café", "déjà"]);
    }
}
