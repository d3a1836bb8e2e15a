use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{GenerationConfig, GenerationRequest, LlmProvider};

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-1.5-flash";
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "Gemini API key is missing. Set llm.api_key in config, \
                 YT_SUMMARIZER_GEMINI_API_KEY or GOOGLE_API_KEY."
            );
        }

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_GEMINI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(settings.llm.timeout_secs))
                .build()
                .context("Failed to build Gemini HTTP client")?,
            api_key,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, GEMINI_MODEL)
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String> {
        let body = GeminiGenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: request.prompt.to_string(),
                }],
            }],
            generation_config: request.config,
        };

        let response = self
            .http
            .post(self.request_url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .context("Gemini request failed")?;

        let response = response
            .error_for_status()
            .context("Gemini returned an error status")?;

        let payload: GeminiGenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        payload.text()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerateContentRequest<'a> {
    contents: Vec<GeminiContent>,
    generation_config: &'a GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    prompt_feedback: Option<GeminiPromptFeedback>,
}

impl GeminiGenerateContentResponse {
    /// Text of the first candidate, parts concatenated as returned.
    fn text(&self) -> Result<String> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            anyhow::bail!("Gemini blocked the prompt: {}", reason);
        }

        let candidate = self
            .candidates
            .first()
            .context("Gemini response did not contain any candidates")?;

        let text: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            anyhow::bail!("Gemini response did not contain summary text");
        }

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_key(key: &str) -> Settings {
        let mut settings = Settings::default();
        settings.llm.api_key = key.to_string();
        settings
    }

    #[test]
    fn request_url_uses_fixed_model() {
        let mut settings = settings_with_key("secret");
        settings.llm.endpoint = "http://localhost:9000/v1beta/".to_string();

        let client = GeminiClient::from_settings(&settings).unwrap();
        assert_eq!(
            client.request_url(),
            "http://localhost:9000/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn failed_request_does_not_expose_api_key() {
        let mut settings = settings_with_key("SECRET-KEY-123");
        settings.llm.endpoint = "http://127.0.0.1:1/v1beta".to_string();
        settings.llm.timeout_secs = 5;

        let client = GeminiClient::from_settings(&settings).unwrap();
        let config = GenerationConfig::default();
        let err = client
            .generate(GenerationRequest {
                prompt: "prompt",
                config: &config,
            })
            .await
            .unwrap_err();

        let logged = format!("{err:#}");
        assert!(logged.contains("Gemini request failed"), "{}", logged);
        assert!(!logged.contains("SECRET-KEY-123"), "{}", logged);
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let err = match GeminiClient::from_settings(&settings_with_key("   ")) {
            Ok(_) => panic!("expected client creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Gemini API key is missing"));
    }

    #[test]
    fn request_body_carries_generation_config() {
        let config = GenerationConfig::default();
        let body = GeminiGenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: "prompt".to_string(),
                }],
            }],
            generation_config: &config,
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "prompt");
        assert_eq!(value["generationConfig"]["topK"], 32);
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn response_text_is_returned_unmodified() {
        let payload: GeminiGenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"**Title**\n"},{"text":"- point one"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(payload.text().unwrap(), "**Title**\n- point one");
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let payload: GeminiGenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        let err = payload.text().unwrap_err().to_string();
        assert!(err.contains("SAFETY"));
    }

    #[test]
    fn empty_candidates_are_an_error() {
        let payload: GeminiGenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(payload.text().is_err());
    }
}
