//! LLM module for yt-summarizer
//!
//! Handles summary generation using the Gemini API.

mod client;
mod gemini;
mod prompts;
mod summarizer;

pub use client::{build_provider, GenerationConfig, GenerationRequest, LlmProvider};
pub use gemini::{GeminiClient, GEMINI_MODEL};
pub use prompts::build_summary_prompt;
pub use summarizer::summarize;
