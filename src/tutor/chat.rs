//! Chat session controller
//!
//! Drives one session the way the chat screen does: the user turn is
//! appended before the generator is called, at most one call is in flight,
//! and every finished call leaves exactly one assistant turn behind, even
//! when the caller gives up waiting.

use super::context::SubjectContext;
use super::session::{ChatTurn, Session};
use crate::llm::{GenerationError, ResponseGenerator};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Assistant turn appended when generation fails
pub const APOLOGY_TEXT: &str = "Sorry, I had trouble processing your request. Please try again.";

/// Errors that stop a submission before or after generation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Tutor is still answering the previous message")]
    Busy,
    #[error("Session has been reset")]
    SessionReset,
}

/// Result of a completed submission
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub user: ChatTurn,
    pub reply: ChatTurn,
    /// Set when `reply` is the apology turn; callers surface it as an alert
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "error_message")]
    pub error: Option<GenerationError>,
}

#[allow(clippy::ref_option)] // signature fixed by serde
fn error_message<S: serde::Serializer>(
    error: &Option<GenerationError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_str(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Read-only view of a session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub context: SubjectContext,
    pub starters: Vec<String>,
    pub turns: Vec<ChatTurn>,
    pub typing: bool,
}

struct SessionState {
    session: Session,
    typing: bool,
    /// Set on reset; a closed session takes no more submissions
    closed: bool,
    /// Bumped on reset so late replies can tell they are stale
    epoch: u64,
}

impl SessionState {
    /// Record the outcome of a generation started at `epoch`
    fn complete(
        &mut self,
        epoch: u64,
        user: ChatTurn,
        result: Result<String, GenerationError>,
    ) -> Result<Exchange, ChatError> {
        if self.epoch != epoch {
            tracing::debug!("Discarding reply for a reset session");
            return Err(ChatError::SessionReset);
        }
        self.typing = false;

        match result {
            Ok(text) => {
                let reply = self.session.append_assistant(text);
                Ok(Exchange {
                    user,
                    reply,
                    error: None,
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not get a response from the tutor");
                let reply = self.session.append_assistant(APOLOGY_TEXT);
                Ok(Exchange {
                    user,
                    reply,
                    error: Some(e),
                })
            }
        }
    }
}

fn lock_state(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One open tutoring session
pub struct ChatSession {
    state: Arc<Mutex<SessionState>>,
    generator: Arc<dyn ResponseGenerator>,
}

impl ChatSession {
    pub fn open(context: SubjectContext, generator: Arc<dyn ResponseGenerator>) -> Self {
        let session = Session::initialize(context);
        tracing::debug!(
            instruction = %session.instruction(),
            "Educational context prepared"
        );
        Self {
            state: Arc::new(Mutex::new(SessionState {
                session,
                typing: false,
                closed: false,
                epoch: 0,
            })),
            generator,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        lock_state(&self.state)
    }

    /// Submit user text and wait for the tutor's reply.
    ///
    /// Generation runs in its own task. If the caller stops waiting, the task
    /// still appends the reply (or the apology) and clears the typing flag.
    pub async fn submit(&self, text: &str) -> Result<Exchange, ChatError> {
        let prompt = text.trim();
        if prompt.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let (user, history, epoch) = {
            let mut state = self.lock();
            if state.closed {
                return Err(ChatError::SessionReset);
            }
            if state.typing {
                return Err(ChatError::Busy);
            }
            let history = state.session.turns().to_vec();
            let user = state.session.append_user(prompt);
            state.typing = true;
            (user, history, state.epoch)
        };

        let task = tokio::spawn({
            let state = Arc::clone(&self.state);
            let generator = Arc::clone(&self.generator);
            let prompt = prompt.to_string();
            let user = user.clone();
            async move {
                let result = generator.generate(&prompt, &history).await;
                let mut state = lock_state(&state);
                state.complete(epoch, user, result)
            }
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "Generation task failed");
                self.lock().complete(
                    epoch,
                    user,
                    Err(GenerationError::network(format!("Generation task failed: {e}"))),
                )
            }
        }
    }

    /// End the session: clear the transcript and refuse further submissions.
    /// A reply still in flight will be discarded.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.session.reset();
        state.typing = false;
        state.closed = true;
        state.epoch += 1;
    }

    pub fn is_typing(&self) -> bool {
        self.lock().typing
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot {
            context: state.session.context().clone(),
            starters: state.session.starters().to_vec(),
            turns: state.session.turns().to_vec(),
            typing: state.typing,
        }
    }
}

/// Open sessions keyed by id
pub struct SessionManager {
    generator: Arc<dyn ResponseGenerator>,
    sessions: RwLock<HashMap<Uuid, Arc<ChatSession>>>,
}

impl SessionManager {
    pub fn new(generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            generator,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub async fn open(&self, context: SubjectContext) -> (Uuid, Arc<ChatSession>) {
        let id = Uuid::new_v4();
        let session = Arc::new(ChatSession::open(context, self.generator.clone()));
        self.sessions.write().await.insert(id, session.clone());
        tracing::info!(session_id = %id, "Tutor session opened");
        (id, session)
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<ChatSession>> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Reset and forget a session. Returns false if it was not open.
    pub async fn end(&self, id: Uuid) -> bool {
        let Some(session) = self.sessions.write().await.remove(&id) else {
            return false;
        };
        session.reset();
        tracing::info!(session_id = %id, "Tutor session ended");
        true
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
