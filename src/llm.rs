//! Response generation for the tutor
//!
//! Provides a common interface over the hosted completion endpoint and the
//! offline keyword fallback.

mod config;
mod error;
mod fallback;
mod gemini;

#[cfg(test)]
mod proptests;

pub use config::{GeminiConfig, GenerationParams, PLACEHOLDER_CREDENTIAL};
pub use error::GenerationError;
pub use fallback::offline_reply;
pub use gemini::GeminiService;

use crate::tutor::ChatTurn;
use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for anything that can answer a tutoring prompt
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Produce a reply to `prompt`. `history` holds the turns that preceded it.
    async fn generate(&self, prompt: &str, history: &[ChatTurn])
        -> Result<String, GenerationError>;

    /// Identifier used in logs
    fn model_id(&self) -> &str;
}

#[async_trait]
impl<T: ResponseGenerator + ?Sized> ResponseGenerator for Arc<T> {
    async fn generate(
        &self,
        prompt: &str,
        history: &[ChatTurn],
    ) -> Result<String, GenerationError> {
        (**self).generate(prompt, history).await
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}

/// Logging wrapper for generators
pub struct LoggingGenerator {
    inner: Arc<dyn ResponseGenerator>,
    model_id: String,
}

impl LoggingGenerator {
    pub fn new(inner: Arc<dyn ResponseGenerator>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl ResponseGenerator for LoggingGenerator {
    async fn generate(
        &self,
        prompt: &str,
        history: &[ChatTurn],
    ) -> Result<String, GenerationError> {
        let start = std::time::Instant::now();
        let result = self.inner.generate(prompt, history).await;
        let duration = start.elapsed();

        match &result {
            Ok(text) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    history_len = history.len(),
                    reply_chars = text.chars().count(),
                    "Generation completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    error = %e,
                    retryable = e.is_retryable(),
                    "Generation failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
