//! Pomodoro timer state types

use serde::{Deserialize, Serialize};

/// A long break replaces the short one after this many focus intervals
pub const LONG_BREAK_EVERY: u32 = 4;

/// Interval kind, each with a fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    #[default]
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub const fn duration_secs(self) -> u32 {
        match self {
            TimerMode::Focus => 25 * 60,
            TimerMode::ShortBreak => 5 * 60,
            TimerMode::LongBreak => 15 * 60,
        }
    }

    pub const fn is_break(self) -> bool {
        matches!(self, TimerMode::ShortBreak | TimerMode::LongBreak)
    }
}

/// Where the countdown is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    #[default]
    Idle,
    /// Counting down a focus interval
    Running,
    Paused,
    /// Counting down a break
    Break,
}

impl TimerState {
    /// Whether a ticker should be live in this state
    pub const fn is_counting(self) -> bool {
        matches!(self, TimerState::Running | TimerState::Break)
    }
}

/// Complete timer value. Transitions replace it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pomodoro {
    pub state: TimerState,
    pub mode: TimerMode,
    pub seconds_left: u32,
    /// Focus intervals finished so far
    pub completed: u32,
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self {
            state: TimerState::Idle,
            mode: TimerMode::Focus,
            seconds_left: TimerMode::Focus.duration_secs(),
            completed: 0,
        }
    }
}

impl Pomodoro {
    /// Remaining time as `MM:SS`
    pub fn format_remaining(&self) -> String {
        let mins = self.seconds_left / 60;
        let secs = self.seconds_left % 60;
        format!("{mins:02}:{secs:02}")
    }

    /// Share of the current interval already elapsed, 0 to 100
    pub fn progress_percent(&self) -> f64 {
        let total = f64::from(self.mode.duration_secs());
        let left = f64::from(self.seconds_left.min(self.mode.duration_secs()));
        (1.0 - left / total) * 100.0
    }
}
