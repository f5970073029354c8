//! Ollama provider for local text generation.
//!
//! Talks to a local Ollama instance via `/api/generate` with streaming off.
//! No authentication required.

use super::provider::{TextProvider, TextRequest, TextResponse};
use crate::error::GenerationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Ollama provider for a single local model.
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

/// Ollama /api/generate request body.
#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Ollama /api/generate response. A missing `response` reads as empty text.
#[derive(Deserialize)]
struct OllamaResponse {
    #[serde(default)]
    response: String,
}

#[async_trait]
impl TextProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.endpoint);
        match self.client.get(&url).timeout(Duration::from_secs(5)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn generate(&self, request: &TextRequest) -> Result<TextResponse, GenerationError> {
        let url = format!("{}/api/generate", self.endpoint);
        let start = Instant::now();

        let body = OllamaRequest {
            model: &self.model,
            prompt: &request.prompt,
            stream: false,
        };

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(format!("Ollama request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GenerationError::RemoteService {
                status: status.as_u16(),
                message: text,
            });
        }

        let ollama_resp: OllamaResponse = resp.json().await.map_err(|e| {
            GenerationError::Decode(format!("Failed to parse Ollama response: {e}"))
        })?;

        Ok(TextResponse {
            text: ollama_resp.response,
            model: self.model.clone(),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_json(json!({"model": "llama3.2", "prompt": "cats", "stream": false})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"response": "Cats own you"})),
            )
            .mount(&server)
            .await;

        let provider = OllamaProvider::new(&server.uri(), "llama3.2");
        let response = provider.generate(&TextRequest::new("cats")).await.unwrap();
        assert_eq!(response.text, "Cats own you");
    }

    #[tokio::test]
    async fn test_generate_missing_response_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
            .mount(&server)
            .await;

        let provider = OllamaProvider::new(&server.uri(), "llama3.2");
        let response = provider.generate(&TextRequest::new("cats")).await.unwrap();
        assert_eq!(response.text, "");
    }

    #[tokio::test]
    async fn test_generate_model_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
            .mount(&server)
            .await;

        let provider = OllamaProvider::new(&server.uri(), "nope");
        let err = provider.generate(&TextRequest::new("cats")).await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_is_available() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
            .mount(&server)
            .await;

        let provider = OllamaProvider::new(&format!("{}/", server.uri()), "llama3.2");
        assert!(provider.is_available().await);
    }
}
