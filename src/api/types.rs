//! API request and response types

use crate::pomodoro::TimerMode;
use crate::tutor::{FormInfo, SessionSnapshot, SubjectInfo};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to open a tutoring session
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub grade: String,
    pub subject: String,
    /// Display title; defaults to the catalog title or the subject id
    pub title: Option<String>,
}

/// Request to send a chat message
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
}

/// Query for starter suggestions
#[derive(Debug, Deserialize)]
pub struct StartersQuery {
    pub grade: String,
    pub subject: String,
}

/// Request to switch the timer mode
#[derive(Debug, Deserialize)]
pub struct SwitchModeRequest {
    pub mode: TimerMode,
    #[serde(default)]
    pub confirmed: bool,
}

/// Session with its id
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub session: SessionSnapshot,
}

#[derive(Debug, Serialize)]
pub struct StartersResponse {
    pub starters: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SubjectsResponse {
    pub subjects: Vec<SubjectInfo>,
}

#[derive(Debug, Serialize)]
pub struct FormsResponse {
    pub forms: Vec<FormInfo>,
}

/// Generic success response
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
