//! Transcript provider abstraction and transcript assembly

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::TranscriptUnavailable;

/// A single timed caption segment as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Start offset in seconds
    pub start: f64,
    /// Duration in seconds
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Provider-level failures. Only logged, never returned to HTTP callers.
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Video is unavailable: {0}")]
    VideoUnavailable(String),

    #[error("Video is unplayable: {0}")]
    Unplayable(String),

    #[error("Request was blocked by YouTube")]
    RequestBlocked,

    #[error("Too many requests sent to YouTube")]
    TooManyRequests,

    #[error("Transcripts are disabled for video {0}")]
    TranscriptsDisabled(String),

    #[error("No transcript found for video {video_id} in languages {languages:?}")]
    NoTranscriptFound {
        video_id: String,
        languages: Vec<String>,
    },

    #[error("Transcript for video {0} requires a PO token")]
    PoTokenRequired(String),

    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}

#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the ordered caption segments for a video.
    async fn fetch_segments(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError>;
}

/// Join segment texts with a single space, preserving provider order.
pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fetch a video's transcript as one string.
///
/// Every provider failure collapses into [`TranscriptUnavailable`]; the cause
/// is logged and dropped.
pub async fn fetch_transcript(
    provider: &dyn TranscriptProvider,
    video_id: &str,
) -> Result<String, TranscriptUnavailable> {
    match provider.fetch_segments(video_id).await {
        Ok(segments) => {
            tracing::debug!(video_id, segments = segments.len(), "Transcript fetched");
            Ok(join_segments(&segments))
        }
        Err(e) => {
            tracing::error!(video_id, error = %e, "Error fetching transcript");
            Err(TranscriptUnavailable)
        }
    }
}
