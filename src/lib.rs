//! StudyFlow - AI tutoring backend for Malaysian secondary school students
//!
//! Grade- and subject-scoped tutor chat backed by Gemini, with an offline
//! keyword tutor when no API key is configured, plus a Pomodoro focus timer.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod api;
pub mod llm;
pub mod pomodoro;
pub mod tutor;

#[cfg(test)]
mod testing;
