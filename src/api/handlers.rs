//! HTTP request handlers

use super::types::{
    ChatRequest, CreateSessionRequest, ErrorResponse, FormsResponse, SessionResponse,
    StartersQuery, StartersResponse, SubjectsResponse, SuccessResponse, SwitchModeRequest,
};
use super::AppState;
use crate::pomodoro::{Event, TimerView, TransitionError};
use crate::tutor::{
    form_catalog, starters, subject_catalog, ChatError, Exchange, GradeLevel, Subject,
    SubjectContext,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Catalog
        .route("/api/forms", get(list_forms))
        .route("/api/subjects", get(list_subjects))
        .route("/api/starters", get(get_starters))
        // Tutor sessions
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(end_session))
        .route("/api/sessions/:id/chat", post(send_chat))
        // Pomodoro timer
        .route("/api/pomodoro", get(get_timer))
        .route("/api/pomodoro/start", post(start_timer))
        .route("/api/pomodoro/pause", post(pause_timer))
        .route("/api/pomodoro/reset", post(reset_timer))
        .route("/api/pomodoro/mode", post(switch_mode))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Catalog
// ============================================================

async fn list_forms() -> Json<FormsResponse> {
    Json(FormsResponse {
        forms: form_catalog(),
    })
}

async fn list_subjects() -> Json<SubjectsResponse> {
    Json(SubjectsResponse {
        subjects: subject_catalog(),
    })
}

async fn get_starters(Query(query): Query<StartersQuery>) -> Json<StartersResponse> {
    Json(StartersResponse {
        starters: starters(&GradeLevel::new(query.grade), &query.subject).collect(),
    })
}

// ============================================================
// Tutor Sessions
// ============================================================

async fn create_session(
    State(state): State<AppState>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    if req.subject.trim().is_empty() {
        return Err(AppError::BadRequest("Subject is required".to_string()));
    }

    let title = req.title.unwrap_or_else(|| {
        Subject::from_id(&req.subject).map_or_else(|| req.subject.clone(), |s| s.title().to_string())
    });
    let context = SubjectContext::new(GradeLevel::new(req.grade), req.subject, title);

    let (id, session) = state.sessions.open(context).await;
    Ok(Json(SessionResponse {
        id,
        session: session.snapshot(),
    }))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))?;

    Ok(Json(SessionResponse {
        id,
        session: session.snapshot(),
    }))
}

async fn send_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Exchange>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {id}")))?;

    let exchange = session.submit(&req.text).await?;
    Ok(Json(exchange))
}

async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponse>, AppError> {
    if state.sessions.end(id).await {
        Ok(Json(SuccessResponse { success: true }))
    } else {
        Err(AppError::NotFound(format!("Session not found: {id}")))
    }
}

// ============================================================
// Pomodoro Timer
// ============================================================

async fn get_timer(State(state): State<AppState>) -> Json<TimerView> {
    Json(state.pomodoro.snapshot().into())
}

fn dispatch_timer(state: &AppState, event: Event) -> Result<Json<TimerView>, AppError> {
    let timer = state.pomodoro.dispatch(event)?;
    Ok(Json(timer.into()))
}

async fn start_timer(State(state): State<AppState>) -> Result<Json<TimerView>, AppError> {
    dispatch_timer(&state, Event::Start)
}

async fn pause_timer(State(state): State<AppState>) -> Result<Json<TimerView>, AppError> {
    dispatch_timer(&state, Event::Pause)
}

async fn reset_timer(State(state): State<AppState>) -> Result<Json<TimerView>, AppError> {
    dispatch_timer(&state, Event::Reset)
}

async fn switch_mode(
    State(state): State<AppState>,
    Json(req): Json<SwitchModeRequest>,
) -> Result<Json<TimerView>, AppError> {
    dispatch_timer(
        &state,
        Event::SwitchMode {
            mode: req.mode,
            confirmed: req.confirmed,
        },
    )
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyMessage => AppError::BadRequest(err.to_string()),
            ChatError::Busy | ChatError::SessionReset => AppError::Conflict(err.to_string()),
        }
    }
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::AlreadyRunning | TransitionError::ConfirmationRequired => {
                AppError::Conflict(err.to_string())
            }
            TransitionError::InvalidTransition(_) => AppError::BadRequest(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
