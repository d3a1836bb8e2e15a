#![allow(dead_code)]

pub mod llm;
pub mod transcripts;

use std::sync::Arc;

use yt_summarizer::SummaryPipeline;

use llm::MockLlm;
use transcripts::MockTranscriptProvider;

pub fn build_pipeline(transcripts: MockTranscriptProvider, llm: MockLlm) -> SummaryPipeline {
    SummaryPipeline::new(Arc::new(transcripts), Arc::new(llm))
}
