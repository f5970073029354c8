//! Configuration management for Memesmith.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Every section implements `Default`, so a missing file or a
//! partial file both work.

mod types;
mod validate;

pub use types::*;

use crate::catalog::Catalog;
use crate::error::{CatalogError, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Memesmith.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template catalog settings
    pub catalog: CatalogConfig,

    /// Suggestion settings
    pub suggest: SuggestConfig,

    /// Text generation provider settings
    pub llm: LlmConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.memesmith.memesmith/config.toml
    /// - Linux: ~/.config/memesmith/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\memesmith\config\config.toml
    ///
    /// Falls back to ~/.memesmith/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "memesmith", "memesmith")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".memesmith").join("config.toml")
            })
    }

    /// Resolved custom catalog path (with ~ expansion), if one is configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| PathBuf::from(shellexpand::tilde(p).into_owned()))
    }

    /// Build the catalog this config points at: the custom file, or the built-in table.
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        match self.catalog_path() {
            Some(path) => Catalog::load_from(&path),
            None => Ok(Catalog::builtin().clone()),
        }
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.suggest.delay_ms, 0);
        assert_eq!(config.suggest.popular_count, 4);
        assert_eq!(config.llm.provider, "gemini");
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[suggest]"));
        assert!(toml.contains("[llm]"));
        assert!(toml.contains("[logging]"));
    }

    #[test]
    fn test_gemini_key_defaults_to_env_reference() {
        let gemini = GeminiConfig::default();
        assert_eq!(gemini.api_key, "${GEMINI_API_KEY}");
        assert!(!gemini.endpoint.contains("key="));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[suggest]
delay_ms = 1500

[llm.gemini]
endpoint = "http://localhost:9999"
api_key = "test-key"
model = "gemini-pro"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.suggest.delay_ms, 1500);
        assert_eq!(config.suggest.popular_count, 4);
        assert_eq!(config.llm.gemini.unwrap().api_key, "test-key");
        assert_eq!(config.output.format, "text");
    }

    #[test]
    fn test_provider_sections_fill_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[llm.gemini]
api_key = "only-the-key"

[llm.ollama]
model = "mistral"
"#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        let gemini = config.llm.gemini.unwrap();
        assert_eq!(gemini.api_key, "only-the-key");
        assert_eq!(gemini.endpoint, GeminiConfig::default().endpoint);
        assert_eq!(gemini.model, "gemini-pro");

        let ollama = config.llm.ollama.unwrap();
        assert_eq!(ollama.model, "mistral");
        assert_eq!(ollama.endpoint, "http://localhost:11434");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[suggest]\npopular_count = 0").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("popular_count"));
    }

    #[test]
    fn test_catalog_defaults_to_builtin() {
        let catalog = Config::default().catalog().unwrap();
        assert_eq!(catalog.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_catalog_from_configured_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[templates]]\nid = \"doge\"\nname = \"Doge\"").unwrap();

        let mut config = Config::default();
        config.catalog.path = Some(file.path().to_string_lossy().into_owned());
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("doge").is_some());
    }

    #[test]
    fn test_empty_catalog_path_is_ignored() {
        let mut config = Config::default();
        config.catalog.path = Some(String::new());
        assert!(config.catalog_path().is_none());
    }
}
