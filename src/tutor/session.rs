//! Session transcript
//!
//! An insertion-ordered list of chat turns. Turns are only ever appended;
//! the only removal is a full reset.

use super::context::{format_educational_context, SubjectContext};
use super::starters::starters;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Author of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One message in a session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    id: Uuid,
    text: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
}

impl ChatTurn {
    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Transcript of one tutoring interaction
#[derive(Debug, Clone)]
pub struct Session {
    context: SubjectContext,
    instruction: String,
    starters: Vec<String>,
    turns: Vec<ChatTurn>,
}

impl Session {
    /// Open a session whose first turn is the assistant's welcome.
    pub fn initialize(context: SubjectContext) -> Self {
        let starters: Vec<String> = starters(&context.grade_level, &context.subject_id)
            .map(String::from)
            .collect();
        let instruction = format_educational_context(&context);

        let mut welcome = format!(
            "Hi there! I'm your Form {} {} AI tutor.",
            context.grade_level, context.subject_title
        );
        if let Some(first) = starters.first() {
            welcome.push(' ');
            welcome.push_str(first);
        }

        Self {
            turns: vec![ChatTurn::new(Sender::Assistant, welcome)],
            context,
            instruction,
            starters,
        }
    }

    pub fn append_user(&mut self, text: impl Into<String>) -> ChatTurn {
        self.append(Sender::User, text)
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) -> ChatTurn {
        self.append(Sender::Assistant, text)
    }

    fn append(&mut self, sender: Sender, text: impl Into<String>) -> ChatTurn {
        let turn = ChatTurn::new(sender, text);
        self.turns.push(turn.clone());
        turn
    }

    /// Drop every turn. Start over with [`Session::initialize`]; appending
    /// to a reset session leaves it without a welcome turn.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn context(&self) -> &SubjectContext {
        &self.context
    }

    /// Tutor instruction prepared for this session's form and subject
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// Starter suggestions, computed once when the session opened
    pub fn starters(&self) -> &[String] {
        &self.starters
    }
}
