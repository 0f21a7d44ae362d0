//! Pomodoro focus timer
//!
//! Implements the Elm Architecture pattern with pure state transitions.

mod effect;
mod event;
mod runtime;
mod state;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use runtime::{Notice, PomodoroRuntime, TimerView};
pub use state::{Pomodoro, TimerMode, TimerState, LONG_BREAK_EVERY};
pub use transition::{transition, TransitionError, TransitionResult};
