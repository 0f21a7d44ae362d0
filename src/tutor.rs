//! AI tutor sessions
//!
//! Subject context formatting, conversation starters, the session transcript
//! and the controller that ties them to a response generator.

mod chat;
mod context;
mod session;
mod starters;
mod subjects;

#[cfg(test)]
mod proptests;

pub use chat::{ChatError, ChatSession, Exchange, SessionManager, SessionSnapshot, APOLOGY_TEXT};
pub use context::{format_educational_context, GradeBand, GradeLevel, SubjectContext};
pub use session::{ChatTurn, Sender, Session};
pub use starters::starters;
pub use subjects::{form_catalog, subject_catalog, FormInfo, Subject, SubjectInfo};
