//! Document routes — upload, job inspection, metadata/text download.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::state::{AppState, ExtractionJob, ExtractionRequest};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/documents", get(list_documents).post(upload_documents))
        .route("/documents/{job_id}", get(get_document).delete(delete_document))
        .route("/documents/{job_id}/metadata", get(download_metadata))
        .route("/documents/{job_id}/text", get(download_text))
}

/// POST /api/documents — upload documents (multipart), one job per file.
async fn upload_documents(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut queued = Vec::new();
    let mut errors = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let filename = match field.file_name() {
            Some(name) => name.to_string(),
            None => continue,
        };
        let safe_filename = sanitize_filename(&filename);

        let format = match docsift_extract::SourceFormat::from_filename(&safe_filename) {
            Some(format) => format,
            None => {
                errors.push(serde_json::json!({
                    "filename": safe_filename,
                    "error": "Unsupported format (expected pdf, docx, or txt)",
                }));
                continue;
            }
        };

        match field.bytes().await {
            Ok(bytes) => {
                let job_id = uuid::Uuid::new_v4().to_string();
                let job = ExtractionJob::queued(job_id.clone(), safe_filename.clone(), format);
                state.jobs.write().insert(job_id.clone(), job);

                let _ = state.extraction_tx.send(ExtractionRequest {
                    job_id: job_id.clone(),
                    filename: safe_filename.clone(),
                    format,
                    bytes: bytes.to_vec(),
                });

                queued.push(serde_json::json!({
                    "jobId": job_id,
                    "filename": safe_filename,
                    "format": format.label(),
                    "size": bytes.len(),
                }));
            }
            Err(e) => {
                errors.push(serde_json::json!({
                    "filename": safe_filename,
                    "error": format!("Read failed: {}", e),
                }));
            }
        }
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "queued": queued.len(),
            "errors": errors.len(),
            "documents": queued,
            "errorDetails": errors,
        })),
    )
}

/// GET /api/documents — list jobs, newest first.
async fn list_documents(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let jobs = state.jobs.read();
    let mut documents: Vec<&ExtractionJob> = jobs.values().collect();
    documents.sort_by(|a, b| b.queued_at.cmp(&a.queued_at));

    Json(serde_json::json!({
        "documents": documents,
        "total": documents.len(),
    }))
}

/// GET /api/documents/:jobId — one job, including the record when done.
async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let jobs = state.jobs.read();
    match jobs.get(&job_id) {
        Some(job) => (StatusCode::OK, Json(serde_json::json!(job))),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Document not found" })),
        ),
    }
}

/// DELETE /api/documents/:jobId — drop a job and its extracted data.
async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    match state.jobs.write().remove(&job_id) {
        Some(_) => (
            StatusCode::OK,
            Json(serde_json::json!({ "deleted": true, "jobId": job_id })),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Document not found" })),
        ),
    }
}

/// GET /api/documents/:jobId/metadata — the record as a JSON attachment.
async fn download_metadata(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> Response {
    let jobs = state.jobs.read();
    let job = match jobs.get(&job_id) {
        Some(job) => job,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Document not found" })),
            )
                .into_response();
        }
    };

    let record = match &job.record {
        Some(record) => record,
        None => {
            return (
                StatusCode::CONFLICT,
                Json(serde_json::json!({
                    "error": "Extraction not finished",
                    "status": job.status,
                })),
            )
                .into_response();
        }
    };

    let body = match serde_json::to_string_pretty(record) {
        Ok(body) => body,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment_disposition(&job.filename, "metadata.json"),
            ),
        ],
        body,
    )
        .into_response()
}

/// GET /api/documents/:jobId/text — the extracted plain text as a download.
async fn download_text(
    State(state): State<Arc<AppState>>,
    Path(job_id): Path<String>,
) -> Response {
    let jobs = state.jobs.read();
    let job = match jobs.get(&job_id) {
        Some(job) => job,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Document not found" })),
            )
                .into_response();
        }
    };

    let text = match &job.text {
        Some(text) => text.clone(),
        None => {
            return (
                StatusCode::CONFLICT,
                Json(serde_json::json!({
                    "error": "Extraction not finished",
                    "status": job.status,
                })),
            )
                .into_response();
        }
    };

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment_disposition(&job.filename, "text.txt"),
            ),
        ],
        text,
    )
        .into_response()
}

/// `report.pdf` + `metadata.json` → `attachment; filename="report_metadata.json"`.
fn attachment_disposition(source_filename: &str, suffix: &str) -> String {
    let stem = source_filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(source_filename);
    format!("attachment; filename=\"{stem}_{suffix}\"")
}

/// Sanitize a filename to prevent path traversal.
fn sanitize_filename(name: &str) -> String {
    let name = name.replace('/', "").replace('\\', "").replace("..", "");

    std::path::Path::new(&name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_directory_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etcpasswd");
        assert_eq!(sanitize_filename("report.pdf"), "report.pdf");
        assert_eq!(sanitize_filename("dir/nested.txt"), "dirnested.txt");
        assert_eq!(sanitize_filename(""), "unnamed");
    }

    #[test]
    fn disposition_names_follow_the_source_file() {
        assert_eq!(
            attachment_disposition("report.pdf", "metadata.json"),
            "attachment; filename=\"report_metadata.json\""
        );
        assert_eq!(
            attachment_disposition("noext", "text.txt"),
            "attachment; filename=\"noext_text.txt\""
        );
    }
}
