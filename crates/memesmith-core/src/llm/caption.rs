//! Caption generation over a text provider.
//!
//! `generate_caption` reports failures to its caller; `generate_suggestion_text`
//! never fails and degrades to a fixed message instead.

use super::provider::{TextProvider, TextRequest};
use crate::error::GenerationResult;
use std::sync::Arc;

/// Returned by [`CaptionGenerator::generate_suggestion_text`] when generation fails.
pub const FALLBACK_CAPTION: &str = "Could not generate meme text.";

/// Generates meme captions with a single provider call per request.
#[derive(Clone)]
pub struct CaptionGenerator {
    provider: Arc<dyn TextProvider>,
}

impl CaptionGenerator {
    pub fn new(provider: Box<dyn TextProvider>) -> Self {
        Self {
            provider: Arc::from(provider),
        }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Send `prompt` verbatim and return the generated text.
    ///
    /// A response without text yields an empty string, not an error.
    pub async fn generate_caption(&self, prompt: &str) -> GenerationResult<String> {
        let response = self.provider.generate(&TextRequest::new(prompt)).await?;
        tracing::debug!(
            provider = self.provider.name(),
            model = %response.model,
            latency_ms = response.latency_ms,
            "Caption generated"
        );
        Ok(response.text)
    }

    /// Ask for a funny caption for a meme description.
    ///
    /// Any failure is logged and replaced by [`FALLBACK_CAPTION`].
    pub async fn generate_suggestion_text(&self, description: &str) -> String {
        let request = TextRequest::meme_caption(description);
        match self.generate_caption(&request.prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), "Caption generation failed: {e}");
                FALLBACK_CAPTION.to_string()
            }
        }
    }
}
