//! Remote text generation for meme captions.
//!
//! Provides a provider abstraction over text-generation backends (Gemini,
//! Ollama) and a caption generator that makes one call per request and
//! degrades to a fixed message when asked to.

pub(crate) mod caption;
pub(crate) mod gemini;
pub(crate) mod ollama;
pub(crate) mod provider;

pub use caption::{CaptionGenerator, FALLBACK_CAPTION};
pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;
pub use provider::{resolve_env_var, TextProvider, TextProviderFactory, TextRequest, TextResponse};
