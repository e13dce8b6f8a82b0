//! Generator trait — the abstraction over remote LLM backends.
//!
//! A Generator knows how to send a prompt (plus an optional system
//! instruction) to a model and return the completion text. The study-aid
//! pipeline calls `generate()` without knowing which provider is behind it.
//!
//! Implementations: OpenAI-compatible endpoints (Groq, OpenAI, OpenRouter).

use crate::error::GeneratorError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The user-facing prompt.
    pub prompt: String,

    /// Optional system/style instruction prepended to the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Temperature (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    3000
}

impl GenerationRequest {
    /// A request with default generation parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }

    /// Attach a system instruction.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// A complete response from a generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// The completion text.
    pub text: String,

    /// Which model actually responded (may differ from requested).
    pub model: String,

    /// Token usage statistics.
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core Generator trait.
///
/// Every LLM backend implements this trait. Responses that are supposed to
/// be structured (flashcards, quiz items) come back as plain text here;
/// schema validation of that untrusted text is the content crate's job.
#[async_trait]
pub trait Generator: Send + Sync {
    /// A human-readable name for this generator (e.g., "groq", "openai").
    fn name(&self) -> &str;

    /// Send a request and get the completion.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResponse, GeneratorError>;

    /// Health check — can we reach the backend?
    async fn health_check(&self) -> std::result::Result<bool, GeneratorError> {
        Ok(true)
    }
}
