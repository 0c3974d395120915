// ABOUTME: Intent classifier mapping an inbound message to one of the agent's tasks
// ABOUTME: Text parts win over data parts; malformed input degrades to a parse request
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Intent classification
//!
//! Pure and deterministic: the same message always yields the same [`Intent`].
//! Classification never fails; free text that is not a known keyword is
//! assumed to be an ingredient list.

use recipe_core::constants::intents;
use serde_json::{Map, Value};

use crate::a2a::{A2AMessage, MessagePart};
use crate::recipes::schema::ParseRequest;

/// What an inbound message asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Greeting or help request
    Greeting,
    /// Daily tip request
    TipRequest,
    /// `parse` command with nothing after it
    EmptyParseRequest,
    /// Free text to parse as an ingredient list
    ParseRequest(ParseRequest),
    /// JSON object typed into a text part
    AdjustRequest(Map<String, Value>),
    /// Object sent in a data part
    DataRequest(Map<String, Value>),
    /// No usable text or data part
    Unrecognized,
}

impl Intent {
    /// Short label for logs
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::TipRequest => "tip",
            Self::EmptyParseRequest => "empty_parse",
            Self::ParseRequest(_) => "parse",
            Self::AdjustRequest(_) => "adjust",
            Self::DataRequest(_) => "data",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Classify a message
#[must_use]
pub fn classify(message: &A2AMessage) -> Intent {
    let text = message
        .parts
        .iter()
        .filter_map(MessagePart::as_text)
        .map(str::trim)
        .find(|text| !text.is_empty());

    if let Some(text) = text {
        return classify_text(text);
    }

    let data = message
        .parts
        .iter()
        .filter_map(MessagePart::as_data)
        .find(|data| !data.is_empty());

    match data {
        Some(data) if requests_tip(data) => Intent::TipRequest,
        Some(data) => Intent::DataRequest(data.clone()),
        None => Intent::Unrecognized,
    }
}

/// Classify trimmed, non-empty free text
fn classify_text(text: &str) -> Intent {
    let normalized = text.to_lowercase();

    if intents::GREETINGS.contains(&normalized.as_str()) {
        return Intent::Greeting;
    }
    if intents::TIP_ALIASES.contains(&normalized.as_str()) {
        return Intent::TipRequest;
    }
    if normalized == intents::PARSE_COMMAND {
        return Intent::EmptyParseRequest;
    }
    if let Some(remainder) = strip_parse_command(text) {
        let remainder = remainder.trim();
        return if remainder.is_empty() {
            Intent::EmptyParseRequest
        } else {
            Intent::ParseRequest(ParseRequest::from_text(remainder))
        };
    }
    if text.starts_with('{') {
        if let Ok(Value::Object(data)) = serde_json::from_str::<Value>(text) {
            return if data.is_empty() {
                Intent::Unrecognized
            } else if requests_tip(&data) {
                Intent::TipRequest
            } else {
                Intent::AdjustRequest(data)
            };
        }
    }

    Intent::ParseRequest(ParseRequest::from_text(text))
}

/// Text after a leading `parse ` command word, matched case-insensitively
fn strip_parse_command(text: &str) -> Option<&str> {
    let prefix_len = intents::PARSE_COMMAND.len() + 1;
    let prefix = text.get(..prefix_len)?;
    let (command, separator) = prefix.split_at(intents::PARSE_COMMAND.len());
    (command.eq_ignore_ascii_case(intents::PARSE_COMMAND) && separator == " ")
        .then(|| &text[prefix_len..])
}

fn requests_tip(data: &Map<String, Value>) -> bool {
    data.get("task").and_then(Value::as_str) == Some(intents::TIP_TASK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a2a::Role;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_keywords_are_case_and_space_insensitive() {
        assert_eq!(classify(&A2AMessage::user_text("  Hello ")), Intent::Greeting);
        assert_eq!(classify(&A2AMessage::user_text("START")), Intent::Greeting);
        assert_eq!(
            classify(&A2AMessage::user_text("Get Daily Tip")),
            Intent::TipRequest
        );
    }

    #[test]
    fn test_parse_prefix_strips_command() {
        let intent = classify(&A2AMessage::user_text("PARSE 2 cups flour and 1 egg"));
        assert_eq!(
            intent,
            Intent::ParseRequest(ParseRequest::from_text("2 cups flour and 1 egg"))
        );
    }

    #[test]
    fn test_bare_parse_is_empty_request() {
        assert_eq!(
            classify(&A2AMessage::user_text("parse ")),
            Intent::EmptyParseRequest
        );
        assert_eq!(
            classify(&A2AMessage::user_text("parse")),
            Intent::EmptyParseRequest
        );
    }

    #[test]
    fn test_parse_without_space_is_free_text() {
        assert_eq!(
            classify(&A2AMessage::user_text("parsley")),
            Intent::ParseRequest(ParseRequest::from_text("parsley"))
        );
    }

    #[test]
    fn test_json_text_becomes_adjust_request() {
        let intent = classify(&A2AMessage::user_text(r#"{"title": "Soup"}"#));
        assert_eq!(intent, Intent::AdjustRequest(data(json!({"title": "Soup"}))));
    }

    #[test]
    fn test_malformed_json_falls_back_to_parse() {
        let text = r#"{"title": "Soup""#;
        assert_eq!(
            classify(&A2AMessage::user_text(text)),
            Intent::ParseRequest(ParseRequest::from_text(text))
        );
    }

    #[test]
    fn test_text_wins_over_data() {
        let message = A2AMessage::new(
            Role::User,
            vec![
                MessagePart::data(data(json!({"task": "get_daily_tip"}))),
                MessagePart::text("hi"),
            ],
        );
        assert_eq!(classify(&message), Intent::Greeting);
    }

    #[test]
    fn test_blank_text_falls_through_to_data() {
        let message = A2AMessage::new(
            Role::User,
            vec![
                MessagePart::text("   "),
                MessagePart::data(data(json!({"task": "get_daily_tip"}))),
            ],
        );
        assert_eq!(classify(&message), Intent::TipRequest);
    }

    #[test]
    fn test_data_passes_through() {
        let payload = data(json!({"foo": "bar"}));
        assert_eq!(
            classify(&A2AMessage::user_data(payload.clone())),
            Intent::DataRequest(payload)
        );
    }

    #[test]
    fn test_no_usable_parts() {
        assert_eq!(
            classify(&A2AMessage::new(Role::User, Vec::new())),
            Intent::Unrecognized
        );
        assert_eq!(
            classify(&A2AMessage::user_data(Map::new())),
            Intent::Unrecognized
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let message = A2AMessage::user_text("1 cup rice");
        assert_eq!(classify(&message), classify(&message));
    }
}
