//! Docsift Pipeline — heuristic metadata extraction.
//!
//! Turns decoded document text into a structured [`MetadataRecord`] using
//! pattern matching, frequency statistics, and extractive summarization.
//! No models, no network, no state between documents: each call
//! normalizes its input once, then every stage reads that same immutable
//! text and fills its own fields.

pub mod detect;
pub mod keywords;
pub mod record;
pub mod stats;
pub mod summary;

use std::borrow::Cow;

use chrono::Utc;
use docsift_core::{Error, Result};

pub use record::MetadataRecord;

/// Tunables for the extraction stages.
#[derive(Debug, Clone)]
pub struct PipelineLimits {
    /// Maximum keywords emitted.
    pub max_keywords: usize,
    /// Minimum keyword length in characters.
    pub min_keyword_len: usize,
    /// Maximum sentences in the summary.
    pub summary_sentences: usize,
    /// Sentences at or below this many characters are not summary candidates.
    pub min_sentence_len: usize,
    /// Lines longer than this many characters cannot be titles.
    pub max_title_len: usize,
    /// Size of the keyword pool the summarizer scores against.
    pub summary_keyword_pool: usize,
}

impl Default for PipelineLimits {
    fn default() -> Self {
        Self {
            max_keywords: 10,
            min_keyword_len: 3,
            summary_sentences: 3,
            min_sentence_len: 20,
            max_title_len: 200,
            summary_keyword_pool: 20,
        }
    }
}

/// The metadata-extraction pipeline.
///
/// Stateless between documents; a shared instance can serve concurrent
/// callers without coordination (the pattern lists and stop words are
/// process-wide read-only constants).
#[derive(Debug, Clone, Default)]
pub struct MetadataPipeline {
    limits: PipelineLimits,
}

impl MetadataPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: PipelineLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &PipelineLimits {
        &self.limits
    }

    /// Extract metadata from one document.
    ///
    /// `text` is optional because upstream decoders may produce nothing;
    /// `None` is the single precondition violation and returns
    /// [`Error::InvalidInput`]. The empty string is valid input and
    /// yields an all-empty record with zero counts. `source_name` feeds
    /// logging only, never the heuristics.
    pub fn extract(&self, text: Option<&str>, source_name: &str) -> Result<MetadataRecord> {
        let raw = text.ok_or_else(|| Error::InvalidInput("missing document text".to_string()))?;
        let text = normalize_line_endings(raw);
        let text = text.as_ref();

        let record = MetadataRecord {
            title: detect::detect_title(text, self.limits.max_title_len),
            author: detect::detect_author(text),
            dates: detect::detect_dates(text),
            keywords: keywords::rank(text, self.limits.max_keywords, self.limits.min_keyword_len),
            summary: summary::summarize(text, &self.limits),
            word_count: stats::count_words(text),
            character_count: stats::count_chars(text),
            extraction_date: Utc::now(),
        };

        tracing::info!(
            "extracted metadata from {}: {} words, {} keywords, {} dates",
            source_name,
            record.word_count,
            record.keywords.len(),
            record.dates.len()
        );

        Ok(record)
    }
}

/// Fold CRLF and bare CR line endings into LF. Borrows when the input
/// has none.
fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
