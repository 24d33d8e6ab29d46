//! Synchronous extraction route for callers that already hold text.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Document text. `null`/missing is rejected; empty string is valid
    /// and yields an all-empty record.
    pub text: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/extract", post(extract_text))
}

/// POST /api/extract — run the pipeline on raw text, no queue involved.
async fn extract_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractRequest>,
) -> Response {
    let source_name = req.source_name.as_deref().unwrap_or("inline");

    match state.pipeline.extract(req.text.as_deref(), source_name) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
    }
}
