//! Google Gemini provider implementation

use super::config::{usable_credential, GeminiConfig, GenerationParams};
use super::fallback::offline_reply;
use super::{GenerationError, ResponseGenerator};
use crate::tutor::ChatTurn;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini service implementation
pub struct GeminiService {
    client: Client,
    config: GeminiConfig,
    params: GenerationParams,
}

impl GeminiService {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            params: GenerationParams::TUTOR,
        }
    }

    /// Whether calls through [`ResponseGenerator::generate`] will stay offline
    pub fn is_offline(&self) -> bool {
        self.config.credential().is_none()
    }

    /// Generate a reply using an explicitly supplied credential.
    ///
    /// A missing or placeholder credential answers from the offline table and
    /// makes no request. Otherwise exactly one POST is made, with no retry.
    /// Only `prompt` goes on the wire; `history` is accepted but not sent.
    pub async fn generate_with_credential(
        &self,
        prompt: &str,
        credential: Option<&str>,
        history: &[ChatTurn],
    ) -> Result<String, GenerationError> {
        let Some(api_key) = usable_credential(credential) else {
            tracing::warn!("No Gemini credential configured, using offline reply");
            return Ok(offline_reply(prompt).to_string());
        };

        let request = self.translate_request(prompt);
        let url = self.config.endpoint();
        tracing::debug!(
            url = %url,
            history_len = history.len(),
            prompt_chars = prompt.chars().count(),
            "Sending Gemini request"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    GenerationError::network(format!("Connection failed: {e}"))
                } else {
                    GenerationError::network(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Gemini returned an error status");
            return Err(GenerationError::upstream(status.as_u16(), body));
        }

        let parsed: GeminiResponse = serde_json::from_str(&body)
            .map_err(|e| GenerationError::malformed(format!("{e} - body: {body}")))?;

        Self::extract_text(parsed)
    }

    fn translate_request(&self, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.params,
        }
    }

    /// First text part of the first candidate, verbatim
    fn extract_text(resp: GeminiResponse) -> Result<String, GenerationError> {
        let candidate = resp
            .candidates
            .and_then(|c| c.into_iter().next())
            .ok_or_else(|| GenerationError::malformed("no candidates"))?;

        let part = candidate
            .content
            .and_then(|c| c.parts)
            .and_then(|p| p.into_iter().next())
            .ok_or_else(|| GenerationError::malformed("candidate has no content parts"))?;

        part.text
            .ok_or_else(|| GenerationError::malformed("first part has no text"))
    }
}

#[async_trait]
impl ResponseGenerator for GeminiService {
    async fn generate(
        &self,
        prompt: &str,
        history: &[ChatTurn],
    ) -> Result<String, GenerationError> {
        self.generate_with_credential(prompt, self.config.credential(), history)
            .await
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GeminiRequest {
    pub(super) contents: Vec<GeminiContent>,
    pub(super) generation_config: GenerationParams,
}

#[derive(Debug, Serialize)]
pub(super) struct GeminiContent {
    pub(super) parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
pub(super) struct GeminiPart {
    pub(super) text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    parts: Option<Vec<GeminiResponsePart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[cfg(test)]
pub(super) fn request_body(prompt: &str) -> serde_json::Value {
    let service = GeminiService::new(GeminiConfig::default());
    serde_json::to_value(service.translate_request(prompt)).unwrap()
}
