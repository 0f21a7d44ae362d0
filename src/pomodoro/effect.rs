//! Effects produced by state transitions

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin emitting one `Tick` per second
    StartTicker,
    /// Stop the live ticker, if any
    StopTicker,
    /// Audible cue that an interval ended
    PlayChime,
    /// User-facing notice
    Notify { title: String, message: String },
}

impl Effect {
    pub fn notify(title: impl Into<String>, message: impl Into<String>) -> Self {
        Effect::Notify {
            title: title.into(),
            message: message.into(),
        }
    }
}
