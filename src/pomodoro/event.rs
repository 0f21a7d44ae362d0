//! Events that drive the Pomodoro timer

use super::state::TimerMode;

/// Events that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // User events
    Start,
    Pause,
    Reset,
    /// Switching away from a live countdown needs `confirmed`
    SwitchMode {
        mode: TimerMode,
        confirmed: bool,
    },

    // Ticker events
    Tick,
}
