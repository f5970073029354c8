//! Text provider trait and request/response types.
//!
//! Defines the interface every text-generation backend implements, plus the
//! factory that builds the right one from CLI flags and config.

use crate::config::LlmConfig;
use crate::error::GenerationError;
use async_trait::async_trait;

/// A request for generated text.
#[derive(Debug, Clone)]
pub struct TextRequest {
    /// Text prompt sent verbatim to the model
    pub prompt: String,
}

impl TextRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Wrap a user's meme description in the caption-writing instruction.
    pub fn meme_caption(description: &str) -> Self {
        Self::new(format!(
            "Generate a funny meme caption for this prompt: \"{description}\". \
             Return only the meme text, no explanations."
        ))
    }
}

/// The response from a text generation call.
#[derive(Debug, Clone)]
pub struct TextResponse {
    /// Generated text; empty when the response carried none
    pub text: String,
    /// Model identifier used
    pub model: String,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Trait that all text providers implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn TextProvider>` for dynamic dispatch).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Provider name for logging (e.g., "gemini", "ollama").
    fn name(&self) -> &str;

    /// Check whether the provider is configured and reachable.
    async fn is_available(&self) -> bool;

    /// Send one request and extract the generated text.
    async fn generate(&self, request: &TextRequest) -> Result<TextResponse, GenerationError>;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Factory that creates the appropriate provider from CLI flags and config.
pub struct TextProviderFactory;

impl TextProviderFactory {
    /// Create a text provider by name.
    ///
    /// # Arguments
    /// * `provider` - Provider identifier ("gemini", "ollama")
    /// * `config` - The full LLM config section
    /// * `model_override` - Optional model name that overrides the config default
    pub fn create(
        provider: &str,
        config: &LlmConfig,
        model_override: Option<&str>,
    ) -> Result<Box<dyn TextProvider>, GenerationError> {
        match provider {
            "gemini" => {
                let cfg = config.gemini.clone().unwrap_or_default();
                let api_key =
                    resolve_env_var(&cfg.api_key).ok_or_else(|| GenerationError::MissingApiKey {
                        provider: "gemini".to_string(),
                        env_hint: "GEMINI_API_KEY env var or llm.gemini.api_key".to_string(),
                    })?;
                let model = model_override
                    .map(String::from)
                    .unwrap_or(cfg.model.clone());
                Ok(Box::new(super::gemini::GeminiProvider::new(
                    &cfg.endpoint,
                    &api_key,
                    &model,
                )))
            }
            "ollama" => {
                let cfg = config.ollama.clone().unwrap_or_default();
                let model = model_override
                    .map(String::from)
                    .unwrap_or(cfg.model.clone());
                Ok(Box::new(super::ollama::OllamaProvider::new(
                    &cfg.endpoint,
                    &model,
                )))
            }
            other => Err(GenerationError::UnknownProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiConfig;

    #[test]
    fn test_meme_caption_prompt() {
        let request = TextRequest::meme_caption("cats vs dogs");
        assert_eq!(
            request.prompt,
            "Generate a funny meme caption for this prompt: \"cats vs dogs\". \
             Return only the meme text, no explanations."
        );
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_factory_unknown_provider() {
        let err = TextProviderFactory::create("clippy", &LlmConfig::default(), None)
            .err()
            .unwrap();
        assert!(matches!(err, GenerationError::UnknownProvider(name) if name == "clippy"));
    }

    #[test]
    fn test_factory_gemini_requires_key() {
        let config = LlmConfig {
            gemini: Some(GeminiConfig {
                api_key: "${DEFINITELY_NOT_SET_XYZ_456}".to_string(),
                ..GeminiConfig::default()
            }),
            ..LlmConfig::default()
        };
        let err = TextProviderFactory::create("gemini", &config, None)
            .err()
            .unwrap();
        assert!(matches!(err, GenerationError::MissingApiKey { .. }));
    }

    #[test]
    fn test_factory_builds_named_providers() {
        let config = LlmConfig {
            gemini: Some(GeminiConfig {
                api_key: "literal-key".to_string(),
                ..GeminiConfig::default()
            }),
            ..LlmConfig::default()
        };
        let gemini = TextProviderFactory::create("gemini", &config, Some("gemini-1.5-flash")).unwrap();
        assert_eq!(gemini.name(), "gemini");

        let ollama = TextProviderFactory::create("ollama", &config, None).unwrap();
        assert_eq!(ollama.name(), "ollama");
    }
}
