//! Queue status and server info routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use docsift_extract::SourceFormat;

use crate::state::{AppState, ExtractionStatus};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/status", get(get_status))
        .route("/server-info", get(get_server_info))
}

/// GET /api/status — summary of the extraction queue.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let jobs = state.jobs.read();
    let queued = jobs
        .values()
        .filter(|j| j.status == ExtractionStatus::Queued)
        .count();
    let processing = jobs
        .values()
        .filter(|j| j.status == ExtractionStatus::Processing)
        .count();
    let completed = jobs
        .values()
        .filter(|j| j.status == ExtractionStatus::Completed)
        .count();
    let failed = jobs
        .values()
        .filter(|j| j.status == ExtractionStatus::Failed)
        .count();

    Json(serde_json::json!({
        "queued": queued,
        "processing": processing,
        "completed": completed,
        "failed": failed,
        "total": jobs.len(),
    }))
}

/// GET /api/server-info — name, version, and pipeline settings.
async fn get_server_info(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let formats: Vec<&str> = SourceFormat::all().iter().map(|f| f.label()).collect();
    let limits = state.pipeline.limits();

    Json(serde_json::json!({
        "name": "Docsift",
        "version": env!("CARGO_PKG_VERSION"),
        "port": state.config.port,
        "maxUploadMb": state.config.max_upload_mb,
        "supportedFormats": formats,
        "pipeline": {
            "maxKeywords": limits.max_keywords,
            "summarySentences": limits.summary_sentences,
        },
    }))
}
