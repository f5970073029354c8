//! Google Gemini provider using the `generateContent` API.
//!
//! The API key is passed as the `key` query parameter and always comes from
//! configuration. Responses are read loosely: any missing segment of
//! `candidates[0].content.parts[0].text` yields an empty string.

use super::provider::{TextProvider, TextRequest, TextResponse};
use crate::error::GenerationError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

/// JSON pointer to the generated text in a `generateContent` response.
const TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Gemini provider for a single model.
pub struct GeminiProvider {
    url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// `endpoint` is the API base (e.g. `https://generativelanguage.googleapis.com/v1beta`).
    pub fn new(endpoint: &str, api_key: &str, model: &str) -> Self {
        let url = format!(
            "{}/models/{}:generateContent",
            endpoint.trim_end_matches('/'),
            model
        );
        Self {
            url,
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

// --- Request types ---

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// Pull the generated text out of a response body, or `""` if it isn't there.
pub(crate) fn extract_text(body: &Value) -> String {
    body.pointer(TEXT_POINTER)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[async_trait]
impl TextProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn generate(&self, request: &TextRequest) -> Result<TextResponse, GenerationError> {
        let start = Instant::now();
        let body = GenerateContentRequest::from_prompt(&request.prompt);

        let resp = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(format!("Gemini request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(GenerationError::RemoteService {
                status: status.as_u16(),
                message: text,
            });
        }

        let json: Value = resp.json().await.map_err(|e| {
            GenerationError::Decode(format!("Failed to parse Gemini response: {e}"))
        })?;

        let text = extract_text(&json);
        if text.is_empty() {
            tracing::debug!("Gemini response carried no candidate text");
        }

        Ok(TextResponse {
            text,
            model: self.model.clone(),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
