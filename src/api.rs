//! HTTP API for StudyFlow
//!
//! Tutor sessions, the subject catalog and the Pomodoro timer.

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::llm::ResponseGenerator;
use crate::pomodoro::PomodoroRuntime;
use crate::tutor::SessionManager;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionManager>,
    pub pomodoro: PomodoroRuntime,
}

impl AppState {
    pub fn new(generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            sessions: Arc::new(SessionManager::new(generator)),
            pomodoro: PomodoroRuntime::new(),
        }
    }
}
