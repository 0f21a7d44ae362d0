//! Property-based tests for the Gemini request layer and offline replies
//!
//! Invariants:
//! - The offline tutor answers every prompt with non-empty text
//! - Offline replies are case-insensitive
//! - The request body always carries the prompt verbatim and the fixed
//!   generation parameters, and nothing else
//! - Usable credentials are exactly the non-blank, non-placeholder ones

use super::config::usable_credential;
use super::gemini::request_body;
use super::{offline_reply, PLACEHOLDER_CREDENTIAL};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn offline_reply_is_total(prompt in any::<String>()) {
        prop_assert!(!offline_reply(&prompt).is_empty());
    }

    #[test]
    fn offline_reply_ignores_case(prompt in "[a-zA-Z ]{0,60}") {
        prop_assert_eq!(
            offline_reply(&prompt.to_uppercase()),
            offline_reply(&prompt.to_lowercase())
        );
    }

    #[test]
    fn request_body_carries_prompt_and_fixed_params(prompt in any::<String>()) {
        let body = request_body(&prompt);
        prop_assert_eq!(&body["contents"][0]["parts"][0]["text"], &json!(prompt));
        prop_assert_eq!(body["contents"].as_array().map(Vec::len), Some(1));
        prop_assert_eq!(
            &body["generationConfig"],
            &json!({
                "temperature": 0.7,
                "topK": 40,
                "topP": 0.95,
                "maxOutputTokens": 1024
            })
        );
        prop_assert_eq!(body.as_object().map(serde_json::Map::len), Some(2));
    }

    #[test]
    fn usable_credentials_are_non_blank_non_placeholder(key in "[ a-zA-Z0-9_]{0,20}") {
        let usable = usable_credential(Some(&key)).is_some();
        let trimmed = key.trim();
        prop_assert_eq!(usable, !trimmed.is_empty() && trimmed != PLACEHOLDER_CREDENTIAL);
    }
}
