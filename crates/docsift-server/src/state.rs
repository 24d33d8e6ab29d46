//! Shared application state.

use std::collections::HashMap;

use docsift_core::DocsiftConfig;
use docsift_extract::SourceFormat;
use docsift_pipeline::{MetadataPipeline, MetadataRecord};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// One document's trip through the extraction queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionJob {
    pub id: String,
    pub filename: String,
    pub format: String,
    pub status: ExtractionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<MetadataRecord>,
    /// Extracted plain text, kept in memory for the text download route.
    /// Never serialized into job JSON.
    #[serde(skip)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub queued_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
}

impl ExtractionJob {
    /// Fresh job in the queued state.
    pub fn queued(id: String, filename: String, format: SourceFormat) -> Self {
        Self {
            id,
            filename,
            format: format.label().to_string(),
            status: ExtractionStatus::Queued,
            record: None,
            text: None,
            error: None,
            queued_at: now_millis(),
            started_at: None,
            completed_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    Queued,
    Processing,
    Completed,
    Failed,
}

/// A request to decode and extract one uploaded document.
pub struct ExtractionRequest {
    pub job_id: String,
    pub filename: String,
    pub format: SourceFormat,
    pub bytes: Vec<u8>,
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: DocsiftConfig,
    pub pipeline: MetadataPipeline,
    pub jobs: RwLock<HashMap<String, ExtractionJob>>,
    pub extraction_tx: mpsc::UnboundedSender<ExtractionRequest>,
    extraction_rx: parking_lot::Mutex<Option<mpsc::UnboundedReceiver<ExtractionRequest>>>,
}

impl AppState {
    pub fn new(config: DocsiftConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            config,
            pipeline: MetadataPipeline::new(),
            jobs: RwLock::new(HashMap::new()),
            extraction_tx: tx,
            extraction_rx: parking_lot::Mutex::new(Some(rx)),
        }
    }

    /// Take the extraction receiver (can only be called once, by the worker).
    pub fn take_extraction_rx(&self) -> Option<mpsc::UnboundedReceiver<ExtractionRequest>> {
        self.extraction_rx.lock().take()
    }
}

pub fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_job_serializes_without_optional_fields() {
        let job = ExtractionJob::queued(
            "job-1".to_string(),
            "report.pdf".to_string(),
            SourceFormat::Pdf,
        );
        let json = serde_json::to_value(&job).unwrap();

        assert_eq!(json["status"], "queued");
        assert_eq!(json["format"], "pdf");
        assert!(json.get("record").is_none());
        assert!(json.get("error").is_none());
        assert!(json.get("started_at").is_none());
        // Extracted text is download-only, never part of job JSON.
        assert!(json.get("text").is_none());
    }

    #[test]
    fn extraction_rx_can_only_be_taken_once() {
        let state = AppState::new(DocsiftConfig::default());
        assert!(state.take_extraction_rx().is_some());
        assert!(state.take_extraction_rx().is_none());
    }
}
