use crate::error::SummarizationError;
use crate::llm::client::{GenerationConfig, GenerationRequest, LlmProvider};
use crate::llm::prompts::build_summary_prompt;

/// Summarize a transcript with the given provider.
///
/// An empty transcript fails before any remote call. Provider failures are
/// logged and collapsed into [`SummarizationError::GenerationFailed`].
pub async fn summarize(
    provider: &dyn LlmProvider,
    config: &GenerationConfig,
    transcript: &str,
) -> Result<String, SummarizationError> {
    if transcript.is_empty() {
        return Err(SummarizationError::EmptyTranscript);
    }

    let prompt = build_summary_prompt(transcript);
    let request = GenerationRequest {
        prompt: &prompt,
        config,
    };

    provider.generate(request).await.map_err(|e| {
        let cause = format!("{e:#}");
        tracing::error!(error = %cause, "Error during Gemini API call");
        SummarizationError::GenerationFailed
    })
}
