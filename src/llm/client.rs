use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

/// Sampling configuration sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_p: 1.0,
            top_k: 32,
            max_output_tokens: 2048,
        }
    }
}

/// Text generation request payload.
pub struct GenerationRequest<'a> {
    pub prompt: &'a str,
    pub config: &'a GenerationConfig,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    Ok(Box::new(GeminiClient::from_settings(settings)?))
}
