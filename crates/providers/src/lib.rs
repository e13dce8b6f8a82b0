//! LLM generation clients for Studyweave.
//!
//! All clients implement the `studyweave_core::Generator` trait.
//! `build_from_config` selects the right endpoint from configuration.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatClient;

use studyweave_core::error::GeneratorError;
use studyweave_core::generator::Generator;

/// Build a generator from configuration.
///
/// Known provider names get their hosted endpoints; anything else requires
/// an explicit `api_url`.
pub fn build_from_config(
    config: &studyweave_config::AppConfig,
) -> Result<std::sync::Arc<dyn Generator>, GeneratorError> {
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| GeneratorError::NotConfigured("no API key configured".into()))?;

    let client = match (config.provider.as_str(), config.api_url.as_deref()) {
        (_, Some(url)) => OpenAiCompatClient::new(config.provider.clone(), url, api_key),
        ("groq", None) => OpenAiCompatClient::groq(api_key),
        ("openai", None) => OpenAiCompatClient::openai(api_key),
        ("openrouter", None) => OpenAiCompatClient::openrouter(api_key),
        (other, None) => {
            return Err(GeneratorError::NotConfigured(format!(
                "unknown provider '{other}' and no api_url set"
            )));
        }
    };

    Ok(std::sync::Arc::new(client.with_model(config.model.clone())))
}
