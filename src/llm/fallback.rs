//! Offline tutor replies
//!
//! Used when no credential is configured. Picks a canned reply by keyword,
//! first match wins, and never touches the network.
//!
//! The greeting must be a whole word ("hi", "hello"). Plain substring
//! matching would answer "Tell me about history" with the greeting, so only
//! the topic keywords are matched as substrings.

use regex::Regex;
use std::sync::LazyLock;

static GREETING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:hello|hi)\b").expect("greeting pattern"));

const GREETING_REPLY: &str = "Hello! How can I help you with your studies today?";
const MATH_REPLY: &str = "Mathematics is all about problem-solving. Is there a specific math concept or problem you need help with?";
const SCIENCE_REPLY: &str = "Science is fascinating! It helps us understand the world around us through observation and experimentation. What science topic are you studying?";
const ENGLISH_REPLY: &str = "English language skills are essential for effective communication. Are you working on grammar, vocabulary, or perhaps an essay?";
const HISTORY_REPLY: &str = "History helps us understand our past and how it shapes our present. Which historical period or event are you studying?";
const DEFAULT_REPLY: &str = "That's an interesting question! Can you tell me more about what you're trying to understand? I'm here to help with your studies.";

/// Substring keyword groups checked after the greeting
const TOPICS: &[(&[&str], &str)] = &[
    (&["math", "formula", "equation"], MATH_REPLY),
    (&["science", "experiment"], SCIENCE_REPLY),
    (&["english", "grammar", "writing"], ENGLISH_REPLY),
    (&["history", "sejarah"], HISTORY_REPLY),
];

/// Canned reply for `prompt`. Total: every input gets an answer.
pub fn offline_reply(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();

    if GREETING_RE.is_match(&lower) {
        return GREETING_REPLY;
    }

    TOPICS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(DEFAULT_REPLY, |(_, reply)| reply)
}
