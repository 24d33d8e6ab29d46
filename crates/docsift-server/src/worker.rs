//! Background extraction queue — decodes uploads and runs the pipeline.

use std::sync::Arc;

use tracing::{error, info};

use crate::state::{now_millis, AppState, ExtractionRequest, ExtractionStatus};

/// Finished jobs retained before the oldest are pruned.
const MAX_FINISHED_JOBS: usize = 50;

/// Start the background extraction worker task.
pub fn start_extraction_worker(state: Arc<AppState>) {
    let mut rx = match state.take_extraction_rx() {
        Some(rx) => rx,
        None => {
            error!("Extraction worker already started");
            return;
        }
    };

    tokio::spawn(async move {
        info!("Background extraction worker started");
        while let Some(request) = rx.recv().await {
            process_extraction_job(&state, request);
        }
    });
}

fn process_extraction_job(state: &AppState, request: ExtractionRequest) {
    let ExtractionRequest {
        job_id,
        filename,
        format,
        bytes,
    } = request;

    {
        let mut jobs = state.jobs.write();
        if let Some(job) = jobs.get_mut(&job_id) {
            job.status = ExtractionStatus::Processing;
            job.started_at = Some(now_millis());
        }
    }

    info!("Processing extraction job {}: {}", job_id, filename);

    match docsift_extract::extract_bytes(&bytes, format) {
        Ok(Some(text)) => match state.pipeline.extract(Some(&text), &filename) {
            Ok(record) => {
                {
                    let mut jobs = state.jobs.write();
                    if let Some(job) = jobs.get_mut(&job_id) {
                        job.status = ExtractionStatus::Completed;
                        job.record = Some(record);
                        job.text = Some(text);
                        job.completed_at = Some(now_millis());
                    }
                }
                info!("Extracted metadata from {}", filename);
            }
            Err(e) => fail_job(state, &job_id, &filename, e.to_string()),
        },
        Ok(None) => fail_job(
            state,
            &job_id,
            &filename,
            "No text could be extracted from the document".to_string(),
        ),
        Err(e) => fail_job(state, &job_id, &filename, e.to_string()),
    }

    cleanup_old_jobs(state);
}

fn fail_job(state: &AppState, job_id: &str, filename: &str, message: String) {
    {
        let mut jobs = state.jobs.write();
        if let Some(job) = jobs.get_mut(job_id) {
            job.status = ExtractionStatus::Failed;
            job.error = Some(message.clone());
            job.completed_at = Some(now_millis());
        }
    }
    error!("Extraction failed for {}: {}", filename, message);
}

/// Drop the oldest finished jobs beyond the retention cap.
fn cleanup_old_jobs(state: &AppState) {
    let mut jobs = state.jobs.write();
    let finished: Vec<String> = jobs
        .iter()
        .filter(|(_, j)| {
            j.status == ExtractionStatus::Completed || j.status == ExtractionStatus::Failed
        })
        .map(|(id, _)| id.clone())
        .collect();

    if finished.len() > MAX_FINISHED_JOBS {
        let mut to_remove: Vec<(String, i64)> = finished
            .iter()
            .filter_map(|id| {
                jobs.get(id)
                    .and_then(|j| j.completed_at)
                    .map(|t| (id.clone(), t))
            })
            .collect();
        to_remove.sort_by_key(|(_, t)| *t);
        let remove_count = to_remove.len() - MAX_FINISHED_JOBS;
        for (id, _) in to_remove.into_iter().take(remove_count) {
            jobs.remove(&id);
        }
    }
}
