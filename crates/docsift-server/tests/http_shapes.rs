//! HTTP response shape tests — validates that route response JSON keeps
//! the field names and types API clients rely on.
//!
//! Route wrappers use camelCase keys; serialized structs (jobs, metadata
//! records) keep their snake_case field names. These tests pin both so a
//! refactor cannot silently rename a field.

use docsift_pipeline::MetadataPipeline;

/// Verify the upload response shape from POST /api/documents:
/// { queued, errors, documents: [{ jobId, filename, format, size }], errorDetails }
#[test]
fn test_upload_response_shape() {
    let response = serde_json::json!({
        "queued": 2,
        "errors": 1,
        "documents": [
            {
                "jobId": "550e8400-e29b-41d4-a716-446655440000",
                "filename": "report.pdf",
                "format": "pdf",
                "size": 48213,
            },
            {
                "jobId": "550e8400-e29b-41d4-a716-446655440001",
                "filename": "notes.txt",
                "format": "txt",
                "size": 812,
            },
        ],
        "errorDetails": [
            {
                "filename": "photo.png",
                "error": "Unsupported format (expected pdf, docx, or txt)",
            }
        ],
    });

    assert!(response["queued"].is_number());
    assert!(response["errors"].is_number());
    assert!(response["documents"].is_array());
    assert!(response["errorDetails"].is_array());

    let doc = &response["documents"][0];
    assert!(doc["jobId"].is_string());
    assert!(doc["filename"].is_string());
    assert!(doc["format"].is_string());
    assert!(doc["size"].is_number());

    let err = &response["errorDetails"][0];
    assert!(err["filename"].is_string());
    assert!(err["error"].is_string());
}

/// Verify the job list response shape from GET /api/documents.
#[test]
fn test_documents_list_shape() {
    let response = serde_json::json!({
        "documents": [
            {
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "filename": "report.pdf",
                "format": "pdf",
                "status": "completed",
                "queued_at": 1756100000000i64,
                "started_at": 1756100000100i64,
                "completed_at": 1756100000900i64,
            }
        ],
        "total": 1,
    });

    assert!(response["documents"].is_array());
    assert!(response["total"].is_number());

    let job = &response["documents"][0];
    assert!(job["id"].is_string());
    assert!(job["filename"].is_string());
    assert!(job["format"].is_string());
    assert!(job["status"].is_string());
    assert!(job["queued_at"].is_number());
}

/// Verify the queue status shape from GET /api/status.
#[test]
fn test_status_response_shape() {
    let status = serde_json::json!({
        "queued": 0,
        "processing": 1,
        "completed": 10,
        "failed": 2,
        "total": 13,
    });

    assert!(status["queued"].is_number());
    assert!(status["processing"].is_number());
    assert!(status["completed"].is_number());
    assert!(status["failed"].is_number());
    assert!(status["total"].is_number());
}

/// Verify the server info shape from GET /api/server-info.
#[test]
fn test_server_info_shape() {
    let info = serde_json::json!({
        "name": "Docsift",
        "version": "0.1.0",
        "port": 8093,
        "maxUploadMb": 200,
        "supportedFormats": ["pdf", "docx", "txt"],
        "pipeline": {
            "maxKeywords": 10,
            "summarySentences": 3,
        },
    });

    assert!(info["name"].is_string());
    assert!(info["version"].is_string());
    assert!(info["port"].is_number());
    assert!(info["maxUploadMb"].is_number());
    assert!(info["supportedFormats"].is_array());
    assert!(info["pipeline"]["maxKeywords"].is_number());
    assert!(info["pipeline"]["summarySentences"].is_number());
}

/// Verify the error body shape shared by 400/404/409 responses.
#[test]
fn test_error_response_shape() {
    let bad_request = serde_json::json!({
        "error": "Invalid input: missing document text",
    });
    assert!(bad_request["error"].is_string());

    let not_finished = serde_json::json!({
        "error": "Extraction not finished",
        "status": "processing",
    });
    assert!(not_finished["error"].is_string());
    assert!(not_finished["status"].is_string());
}

/// Run the real pipeline and verify the metadata record JSON that
/// POST /api/extract and the metadata download route both emit.
#[test]
fn test_metadata_record_shape() {
    let text = "Quarterly Report\nAuthor: Dana Reeves\n\nPublished 2024-03-15.\n\
                Revenue grew in every region this quarter. Revenue projections \
                for the next quarter remain strong across every region.";
    let record = MetadataPipeline::new()
        .extract(Some(text), "quarterly.txt")
        .unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["title"], "Quarterly Report");
    assert_eq!(json["author"], "Dana Reeves");
    assert_eq!(json["dates"][0], "2024-03-15");
    assert!(json["keywords"].is_array());
    assert!(json["summary"].is_string());
    assert!(json["word_count"].is_number());
    assert!(json["character_count"].is_number());
    // chrono serializes the timestamp as an RFC 3339 string
    assert!(json["extraction_date"].is_string());
}

/// Missing fields serialize as null, never disappear from the record.
#[test]
fn test_metadata_record_nulls() {
    let record = MetadataPipeline::new().extract(Some(""), "empty.txt").unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert!(json["title"].is_null());
    assert!(json["author"].is_null());
    assert_eq!(json["dates"], serde_json::json!([]));
    assert_eq!(json["keywords"], serde_json::json!([]));
    assert_eq!(json["summary"], "");
    assert_eq!(json["word_count"], 0);
    assert_eq!(json["character_count"], 0);
}
