//! yt-summarizer - Summarize YouTube videos from their transcripts
//!
//! Fetches a video's captions, asks Gemini for a bulleted summary, and serves
//! the result over a single HTTP endpoint.

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod server;
pub mod transcript;

pub use error::{PipelineError, SummarizationError, TranscriptUnavailable};
pub use pipeline::SummaryPipeline;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "yt-summarizer";
