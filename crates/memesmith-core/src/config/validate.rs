//! Configuration validation.

use crate::error::ConfigError;
use crate::output::OutputFormat;

use super::Config;

impl Config {
    /// Validate configuration values are usable.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.suggest.popular_count == 0 {
            return Err(ConfigError::ValidationError(
                "suggest.popular_count must be > 0".into(),
            ));
        }
        if self.llm.provider.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "llm.provider must not be empty".into(),
            ));
        }
        if OutputFormat::parse(&self.output.format).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "output.format must be one of json, jsonl, text (got {:?})",
                self.output.format
            )));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"pretty\" or \"json\" (got {:?})",
                self.logging.format
            )));
        }
        if let Some(gemini) = &self.llm.gemini {
            if gemini.endpoint.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "llm.gemini.endpoint must not be empty".into(),
                ));
            }
        }
        if let Some(ollama) = &self.llm.ollama {
            if ollama.endpoint.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "llm.ollama.endpoint must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}
