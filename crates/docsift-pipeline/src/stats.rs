//! Document statistics: word and character counts.

/// Count whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count characters, whitespace included.
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}
