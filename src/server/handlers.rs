//! HTTP request handlers

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::server::AppState;

/// Body of `POST /api/summarize`.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Successful summarize response.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Summarize a video.
///
/// The body is parsed as JSON regardless of its content type. A body that is
/// malformed or lacks a string `video_id` is treated as a missing identifier.
pub async fn summarize_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SummarizeResponse>, PipelineError> {
    let video_id = match serde_json::from_slice::<SummarizeRequest>(&body) {
        Ok(request) => request.video_id.unwrap_or_default(),
        Err(e) => {
            debug!(error = %e, "Rejected summarize request body");
            String::new()
        }
    };

    debug!(video_id = %video_id, "Summarize request received");

    let summary = state
        .pipeline
        .run(&video_id)
        .await
        .inspect_err(|e| {
            warn!(video_id = %video_id, error = %e, status = %e.status_code(), "Summarize request failed")
        })?;

    info!(video_id = %video_id, chars = summary.len(), "Summary generated");
    Ok(Json(SummarizeResponse { summary }))
}

/// Health check endpoint.
pub async fn health_handler() -> &'static str {
    "ok"
}
