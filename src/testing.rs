//! Mock implementations for testing
//!
//! These mocks enable testing sessions and the Gemini client without real I/O.

use crate::llm::{GenerationError, ResponseGenerator};
use crate::tutor::ChatTurn;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

// ============================================================================
// Mock generator
// ============================================================================

/// Generator that returns queued replies and records what it was asked
pub struct MockGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    model_id: String,
    prompts: Mutex<Vec<String>>,
    history_lens: Mutex<Vec<usize>>,
    gate: Option<Gate>,
}

struct Gate {
    started: Notify,
    release: Notify,
}

impl MockGenerator {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            model_id: model_id.into(),
            prompts: Mutex::new(Vec::new()),
            history_lens: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// A generator whose calls block until [`MockGenerator::release`] is called
    pub fn gated(model_id: impl Into<String>) -> Self {
        Self {
            gate: Some(Gate {
                started: Notify::new(),
                release: Notify::new(),
            }),
            ..Self::new(model_id)
        }
    }

    pub fn queue_reply(&self, text: impl Into<String>) {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn queue_error(&self, error: GenerationError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    /// Wait until a gated call has started
    pub async fn wait_started(&self) {
        if let Some(gate) = &self.gate {
            gate.started.notified().await;
        }
    }

    /// Let one gated call finish
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.release.notify_one();
        }
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn recorded_history_lens(&self) -> Vec<usize> {
        self.history_lens.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResponseGenerator for MockGenerator {
    async fn generate(
        &self,
        prompt: &str,
        history: &[ChatTurn],
    ) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.history_lens.lock().unwrap().push(history.len());

        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::network("No mock reply queued")))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

// ============================================================================
// Mock upstream HTTP endpoint
// ============================================================================

/// A request received by [`MockUpstream`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub key: Option<String>,
    pub body: Value,
}

struct UpstreamState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process HTTP server that answers every request with a fixed response
pub struct MockUpstream {
    addr: SocketAddr,
    state: Arc<UpstreamState>,
    server: JoinHandle<()>,
}

impl MockUpstream {
    pub async fn start(status: u16, body: String) -> Self {
        let state = Arc::new(UpstreamState {
            status: StatusCode::from_u16(status).unwrap(),
            body,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            state,
            server,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn record(
    State(state): State<Arc<UpstreamState>>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        key: query.get("key").cloned(),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    });
    (state.status, state.body.clone()).into_response()
}
