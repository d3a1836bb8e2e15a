use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use yt_summarizer::llm::{GenerationConfig, GenerationRequest, LlmProvider};

#[derive(Debug, Clone)]
pub struct RecordedGeneration {
    pub prompt: String,
    pub config: GenerationConfig,
}

#[derive(Clone)]
pub struct MockLlm {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<RecordedGeneration>>>,
    pub fail_with: Option<String>,
}

impl MockLlm {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl LlmProvider for MockLlm {
    async fn generate(&self, request: GenerationRequest<'_>) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(RecordedGeneration {
            prompt: request.prompt.to_string(),
            config: *request.config,
        });
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.summary.clone())
    }
}
