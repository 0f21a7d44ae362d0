//! Pure state transition function
//!
//! Given the same timer and event, always produces the same result. All I/O
//! (ticker, chime, notices) is expressed as returned effects.

use super::state::{Pomodoro, TimerMode, TimerState, LONG_BREAK_EVERY};
use super::{Effect, Event};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: Pomodoro,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: Pomodoro) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Timer is already running")]
    AlreadyRunning,
    #[error("Switching modes will reset the running timer; confirm to continue")]
    ConfirmationRequired,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

pub fn transition(timer: &Pomodoro, event: Event) -> Result<TransitionResult, TransitionError> {
    match (timer.state, event) {
        // Idle/Paused + Start -> counting
        (TimerState::Idle | TimerState::Paused, Event::Start) => {
            let mut next = *timer;
            next.state = if timer.mode.is_break() {
                TimerState::Break
            } else {
                TimerState::Running
            };
            if next.seconds_left == 0 {
                next.seconds_left = timer.mode.duration_secs();
            }
            Ok(TransitionResult::new(next).with_effect(Effect::StartTicker))
        }

        (TimerState::Running | TimerState::Break, Event::Start) => {
            Err(TransitionError::AlreadyRunning)
        }

        // Counting + Pause -> Paused
        (TimerState::Running | TimerState::Break, Event::Pause) => {
            let next = Pomodoro {
                state: TimerState::Paused,
                ..*timer
            };
            Ok(TransitionResult::new(next).with_effect(Effect::StopTicker))
        }

        (state @ (TimerState::Idle | TimerState::Paused), Event::Pause) => Err(
            TransitionError::InvalidTransition(format!("cannot pause while {state:?}")),
        ),

        // Any + Reset -> Idle with a full interval
        (state, Event::Reset) => {
            let next = Pomodoro {
                state: TimerState::Idle,
                seconds_left: timer.mode.duration_secs(),
                ..*timer
            };
            Ok(TransitionResult::new(next).with_effects(stop_if_counting(state)))
        }

        // Counting + Tick -> decrement or complete
        (TimerState::Running | TimerState::Break, Event::Tick) => {
            if timer.seconds_left <= 1 {
                Ok(complete_interval(timer))
            } else {
                let next = Pomodoro {
                    seconds_left: timer.seconds_left - 1,
                    ..*timer
                };
                Ok(TransitionResult::new(next))
            }
        }

        // Stale tick after pause or completion
        (TimerState::Idle | TimerState::Paused, Event::Tick) => Ok(TransitionResult::new(*timer)),

        (
            TimerState::Running | TimerState::Break,
            Event::SwitchMode {
                confirmed: false, ..
            },
        ) => Err(TransitionError::ConfirmationRequired),

        (state, Event::SwitchMode { mode, .. }) => {
            let next = Pomodoro {
                state: TimerState::Idle,
                mode,
                seconds_left: mode.duration_secs(),
                ..*timer
            };
            Ok(TransitionResult::new(next).with_effects(stop_if_counting(state)))
        }
    }
}

fn stop_if_counting(state: TimerState) -> Option<Effect> {
    state.is_counting().then_some(Effect::StopTicker)
}

/// Interval ran out: pick the next mode and tell the user
fn complete_interval(timer: &Pomodoro) -> TransitionResult {
    let (mode, completed, notice) = if timer.mode == TimerMode::Focus {
        let completed = timer.completed + 1;
        if completed % LONG_BREAK_EVERY == 0 {
            (
                TimerMode::LongBreak,
                completed,
                Effect::notify("Great job!", "Time for a longer break."),
            )
        } else {
            (
                TimerMode::ShortBreak,
                completed,
                Effect::notify("Pomodoro completed!", "Time for a short break."),
            )
        }
    } else {
        (
            TimerMode::Focus,
            timer.completed,
            Effect::notify("Break finished", "Time to focus again!"),
        )
    };

    let next = Pomodoro {
        state: TimerState::Idle,
        mode,
        seconds_left: mode.duration_secs(),
        completed,
    };

    TransitionResult::new(next)
        .with_effect(Effect::StopTicker)
        .with_effect(Effect::PlayChime)
        .with_effect(notice)
}
