//! CLI enum types shared by commands: output format and text provider.

use clap::ValueEnum;
use memesmith_core::OutputFormat as CoreOutputFormat;

/// Supported output formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON value
    Json,
    /// One JSON object per line (newline-delimited)
    Jsonl,
    /// Human-readable listing
    Text,
}

impl From<OutputFormat> for CoreOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => CoreOutputFormat::Json,
            OutputFormat::Jsonl => CoreOutputFormat::JsonLines,
            OutputFormat::Text => CoreOutputFormat::Text,
        }
    }
}

/// Supported text providers.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Provider {
    /// Google Gemini API
    Gemini,
    /// Local Ollama instance
    Ollama,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Gemini => write!(f, "gemini"),
            Provider::Ollama => write!(f, "ollama"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_maps_to_core() {
        assert_eq!(CoreOutputFormat::from(OutputFormat::Jsonl), CoreOutputFormat::JsonLines);
        assert_eq!(CoreOutputFormat::from(OutputFormat::Text), CoreOutputFormat::Text);
    }

    #[test]
    fn test_provider_display_matches_factory_names() {
        assert_eq!(Provider::Gemini.to_string(), "gemini");
        assert_eq!(Provider::Ollama.to_string(), "ollama");
    }
}
