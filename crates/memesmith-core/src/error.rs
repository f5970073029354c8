//! Error types for Memesmith.
//!
//! Errors are grouped by component so messages carry the context that matters
//! (config path problems, catalog ids, HTTP status codes).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Memesmith operations.
#[derive(Error, Debug)]
pub enum MemeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Template catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Caption generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while building or loading a template catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two templates share the same id
    #[error("Duplicate template id: {0}")]
    DuplicateId(String),

    /// The catalog contains no templates
    #[error("Catalog has no templates")]
    Empty,

    /// Failed to read a catalog file
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a catalog file
    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors from the remote text-generation path.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The endpoint answered with a non-success HTTP status
    #[error("Remote service error {status}: {message}")]
    RemoteService { status: u16, message: String },

    /// The request never produced a response (DNS, connect, TLS, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body was not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// No API key could be resolved for the provider
    #[error("API key not set for {provider}. Set {env_hint}.")]
    MissingApiKey { provider: String, env_hint: String },

    /// The configured provider name is not recognised
    #[error("Unknown text provider: {0}")]
    UnknownProvider(String),
}

impl GenerationError {
    /// HTTP status code, when the failure came from the remote service.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RemoteService { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for Memesmith results.
pub type Result<T> = std::result::Result<T, MemeError>;

/// Convenience type alias for generation results.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_service_status_code() {
        let err = GenerationError::RemoteService {
            status: 500,
            message: "internal".to_string(),
        };
        assert_eq!(err.status_code(), Some(500));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = GenerationError::Transport("connection refused".to_string());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_catalog_error_wraps_into_meme_error() {
        let err: MemeError = CatalogError::DuplicateId("success-kid".to_string()).into();
        assert!(err.to_string().contains("success-kid"));
    }
}
