//! Runtime for the Pomodoro timer
//!
//! Applies events to the pure state machine and executes the resulting
//! effects: a one-second ticker task and user notices.

use super::state::Pomodoro;
use super::transition::{transition, TransitionError};
use super::{Effect, Event};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Notice emitted when an interval ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Timer as shown to clients
#[derive(Debug, Clone, Serialize)]
pub struct TimerView {
    #[serde(flatten)]
    pub timer: Pomodoro,
    pub remaining: String,
    pub progress_percent: f64,
}

impl From<Pomodoro> for TimerView {
    fn from(timer: Pomodoro) -> Self {
        Self {
            remaining: timer.format_remaining(),
            progress_percent: timer.progress_percent(),
            timer,
        }
    }
}

struct TimerCell {
    timer: Pomodoro,
    ticker: Option<CancellationToken>,
}

struct Inner {
    cell: Mutex<TimerCell>,
    notices: broadcast::Sender<Notice>,
}

/// Handle to a running timer. Cheap to clone.
#[derive(Clone)]
pub struct PomodoroRuntime {
    inner: Arc<Inner>,
}

impl Default for PomodoroRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl PomodoroRuntime {
    pub fn new() -> Self {
        let (notices, _) = broadcast::channel(16);
        Self {
            inner: Arc::new(Inner {
                cell: Mutex::new(TimerCell {
                    timer: Pomodoro::default(),
                    ticker: None,
                }),
                notices,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TimerCell> {
        self.inner.cell.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Pomodoro {
        self.lock().timer
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.inner.notices.subscribe()
    }

    /// Apply a user event. Must be called from within a tokio runtime.
    pub fn dispatch(&self, event: Event) -> Result<Pomodoro, TransitionError> {
        let mut cell = self.lock();
        self.apply(&mut cell, event)
    }

    /// Effects run while the cell is locked, so a tick from a ticker that
    /// was just cancelled can never land on the next countdown.
    fn apply(&self, cell: &mut TimerCell, event: Event) -> Result<Pomodoro, TransitionError> {
        let result = transition(&cell.timer, event)?;
        cell.timer = result.new_state;

        for effect in result.effects {
            match effect {
                Effect::StartTicker => self.start_ticker(cell),
                Effect::StopTicker => {
                    if let Some(token) = cell.ticker.take() {
                        token.cancel();
                    }
                }
                Effect::PlayChime => {
                    tracing::info!(mode = ?cell.timer.mode, "Interval finished");
                }
                Effect::Notify { title, message } => {
                    tracing::info!(%title, %message, completed = cell.timer.completed, "Pomodoro notice");
                    // No subscribers is fine
                    let _ = self.inner.notices.send(Notice { title, message });
                }
            }
        }

        Ok(cell.timer)
    }

    fn start_ticker(&self, cell: &mut TimerCell) {
        let token = CancellationToken::new();
        if let Some(old) = cell.ticker.replace(token.clone()) {
            old.cancel();
        }

        let runtime = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            // First tick completes immediately
            interval.tick().await;
            loop {
                tokio::select! {
                    () = token.cancelled() => break,
                    _ = interval.tick() => {
                        if !runtime.tick(&token) {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("Pomodoro ticker stopped");
        });
    }

    /// Returns false once `token` is no longer the live ticker
    fn tick(&self, token: &CancellationToken) -> bool {
        let mut cell = self.lock();
        if token.is_cancelled() {
            return false;
        }
        if let Err(e) = self.apply(&mut cell, Event::Tick) {
            tracing::warn!(error = %e, "Tick rejected");
        }
        !token.is_cancelled()
    }
}
