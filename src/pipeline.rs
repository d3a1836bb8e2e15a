//! Transcript → summary pipeline orchestration

use anyhow::Result;
use std::sync::Arc;

use crate::config::Settings;
use crate::error::{PipelineError, TranscriptUnavailable};
use crate::llm::{build_provider, summarize, GenerationConfig, LlmProvider};
use crate::transcript::{fetch_transcript, TranscriptProvider, YouTubeTranscriptClient};

/// Both providers plus the generation parameters, built once at startup.
pub struct SummaryPipeline {
    transcripts: Arc<dyn TranscriptProvider>,
    llm: Arc<dyn LlmProvider>,
    generation: GenerationConfig,
}

impl SummaryPipeline {
    pub fn new(transcripts: Arc<dyn TranscriptProvider>, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            transcripts,
            llm,
            generation: GenerationConfig::default(),
        }
    }

    /// Build the pipeline against YouTube and Gemini.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transcripts = YouTubeTranscriptClient::from_settings(settings)?;
        let llm = build_provider(settings)?;

        Ok(Self::new(Arc::new(transcripts), Arc::from(llm)))
    }

    pub fn generation_config(&self) -> &GenerationConfig {
        &self.generation
    }

    /// Fetch the assembled transcript for a video.
    pub async fn transcript(&self, video_id: &str) -> Result<String, TranscriptUnavailable> {
        fetch_transcript(self.transcripts.as_ref(), video_id).await
    }

    /// Run the full pipeline for one video.
    pub async fn run(&self, video_id: &str) -> Result<String, PipelineError> {
        if video_id.is_empty() {
            return Err(PipelineError::VideoIdRequired);
        }

        let transcript = self.transcript(video_id).await?;
        tracing::debug!(video_id, chars = transcript.len(), "Transcript assembled");

        let summary = summarize(self.llm.as_ref(), &self.generation, &transcript).await?;
        Ok(summary)
    }
}
