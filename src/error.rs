//! Error kinds surfaced by the summarize pipeline
//!
//! Provider failures are collapsed into these fixed, user-facing errors at the
//! component boundary. The underlying cause is only ever logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// The transcript provider could not produce a transcript for a video.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Transcript not available for this video.")]
pub struct TranscriptUnavailable;

/// Summary generation failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarizationError {
    #[error("Cannot summarize an empty transcript.")]
    EmptyTranscript,

    #[error("Failed to generate summary.")]
    GenerationFailed,
}

/// Terminal outcome of a failed summarize request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Video ID is required")]
    VideoIdRequired,

    #[error(transparent)]
    TranscriptUnavailable(#[from] TranscriptUnavailable),

    #[error(transparent)]
    Summarization(#[from] SummarizationError),
}

impl PipelineError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::VideoIdRequired => StatusCode::BAD_REQUEST,
            Self::TranscriptUnavailable(_) | Self::Summarization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// JSON body for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed() {
        assert_eq!(
            PipelineError::VideoIdRequired.to_string(),
            "Video ID is required"
        );
        assert_eq!(
            PipelineError::from(TranscriptUnavailable).to_string(),
            "Transcript not available for this video."
        );
        assert_eq!(
            PipelineError::from(SummarizationError::GenerationFailed).to_string(),
            "Failed to generate summary."
        );
        assert_eq!(
            PipelineError::from(SummarizationError::EmptyTranscript).to_string(),
            "Cannot summarize an empty transcript."
        );
    }

    #[test]
    fn client_errors_map_to_400_and_provider_errors_to_500() {
        assert_eq!(
            PipelineError::VideoIdRequired.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PipelineError::from(TranscriptUnavailable).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            PipelineError::from(SummarizationError::EmptyTranscript).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
