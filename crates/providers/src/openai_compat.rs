//! OpenAI-compatible generation client.
//!
//! Works with: Groq, OpenAI, OpenRouter, Ollama, vLLM, and any endpoint
//! exposing an OpenAI-compatible `/chat/completions` route. A single
//! non-streaming completion per call — the content pipeline wants whole
//! responses it can validate, not token deltas.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use studyweave_core::error::GeneratorError;
use studyweave_core::generator::{GenerationRequest, GenerationResponse, Generator, Usage};
use tracing::{debug, warn};

/// An OpenAI-compatible generation client.
pub struct OpenAiCompatClient {
    name: String,
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAiCompatClient {
    /// Create a new OpenAI-compatible client.
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: "llama-3.1-8b-instant".into(),
            client,
        }
    }

    /// Create a Groq client (convenience constructor).
    pub fn groq(api_key: impl Into<String>) -> Self {
        Self::new("groq", "https://api.groq.com/openai/v1", api_key)
    }

    /// Create an OpenAI client (convenience constructor).
    pub fn openai(api_key: impl Into<String>) -> Self {
        Self::new("openai", "https://api.openai.com/v1", api_key).with_model("gpt-4o-mini")
    }

    /// Create an OpenRouter client (convenience constructor).
    pub fn openrouter(api_key: impl Into<String>) -> Self {
        Self::new("openrouter", "https://openrouter.ai/api/v1", api_key)
    }

    /// Set the model used for completions.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the chat messages: optional system instruction, then the prompt.
    fn to_api_messages(request: &GenerationRequest) -> Vec<ApiMessage> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = &request.system {
            messages.push(ApiMessage {
                role: "system".into(),
                content: system.clone(),
            });
        }
        messages.push(ApiMessage {
            role: "user".into(),
            content: request.prompt.clone(),
        });
        messages
    }
}

#[async_trait]
impl Generator for OpenAiCompatClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GeneratorError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = serde_json::json!({
            "model": self.model,
            "messages": Self::to_api_messages(&request),
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
            "stream": false,
        });

        debug!(provider = %self.name, model = %self.model, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout(e.to_string())
                } else {
                    GeneratorError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(GeneratorError::RateLimited {
                retry_after_secs: 5,
            });
        }

        if status == 401 || status == 403 {
            return Err(GeneratorError::AuthenticationFailed(
                "Invalid API key or insufficient permissions".into(),
            ));
        }

        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(GeneratorError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_response: ApiResponse =
            response.json().await.map_err(|e| GeneratorError::ApiError {
                status_code: 200,
                message: format!("Failed to parse response: {e}"),
            })?;

        let choice =
            api_response
                .choices
                .into_iter()
                .next()
                .ok_or_else(|| GeneratorError::ApiError {
                    status_code: 200,
                    message: "No choices in response".into(),
                })?;

        let text = choice.message.content.unwrap_or_default();
        if text.is_empty() {
            return Err(GeneratorError::EmptyCompletion(api_response.model));
        }

        let usage = api_response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(GenerationResponse {
            text,
            model: api_response.model,
            usage,
        })
    }

    async fn health_check(&self) -> std::result::Result<bool, GeneratorError> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        Ok(response.status().is_success())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    model: String,
    choices: Vec<ApiChoice>,
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ApiResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groq_constructor() {
        let client = OpenAiCompatClient::groq("gsk-test");
        assert_eq!(client.name(), "groq");
        assert!(client.base_url.contains("api.groq.com"));
        assert_eq!(client.model, "llama-3.1-8b-instant");
    }

    #[test]
    fn openrouter_constructor() {
        let client = OpenAiCompatClient::openrouter("sk-test");
        assert_eq!(client.name(), "openrouter");
        assert!(client.base_url.contains("openrouter.ai"));
    }

    #[test]
    fn trailing_slash_trimmed_from_base_url() {
        let client = OpenAiCompatClient::new("vllm", "http://localhost:8001/v1/", "k");
        assert_eq!(client.base_url, "http://localhost:8001/v1");
    }

    #[test]
    fn system_instruction_becomes_first_message() {
        let request = GenerationRequest::new("Explain this topic clearly: entropy")
            .with_system("You are a helpful educational assistant.");
        let messages = OpenAiCompatClient::to_api_messages(&request);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }

    #[test]
    fn prompt_only_request_has_single_message() {
        let request = GenerationRequest::new("Summarize this text");
        let messages = OpenAiCompatClient::to_api_messages(&request);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
    }

    #[test]
    fn parse_completion_response() {
        let data = r#"{
            "model": "llama-3.1-8b-instant",
            "choices": [{"message": {"role": "assistant", "content": "Entropy is..."}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 40, "total_tokens": 52}
        }"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Entropy is...")
        );
        assert_eq!(parsed.usage.unwrap().total_tokens, 52);
    }

    #[test]
    fn parse_response_without_usage() {
        let data = r#"{"model": "m", "choices": [{"message": {"content": "hi"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        assert!(parsed.usage.is_none());
    }

    #[test]
    fn parse_response_with_null_content() {
        let data = r#"{"model": "m", "choices": [{"message": {"content": null}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(data).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
