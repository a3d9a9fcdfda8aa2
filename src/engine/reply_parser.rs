use serde_json::Value;

use crate::model::reading::{Reading, Slot};

/// Literal marker the flow uses between sections of the reply text.
pub const SECTION_MARKER: &str = "####";

/// Line shown when a rejection reply carries no message of its own.
const UNSPECIFIED_ERROR: &str = "The service reported an error without a message.";

/// What one raw reply amounts to, checked in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The service answered with an explicit error field.
    Rejected(String),
    /// The reply parsed but held no usable text.
    Empty,
    /// Usable text, already split into sections.
    Reading(Reading),
}

pub fn evaluate_reply(reply: &Value) -> ReplyOutcome {
    if let Some(message) = rejection_message(reply) {
        return ReplyOutcome::Rejected(message);
    }
    let text = extract_reply_text(reply);
    if text.is_empty() {
        return ReplyOutcome::Empty;
    }
    ReplyOutcome::Reading(split_sections(text))
}

/// A reply is a rejection when it carries a top-level `error` key, whatever
/// that key's value is.
pub fn rejection_message(reply: &Value) -> Option<String> {
    reply.get("error")?;
    let message = reply
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(UNSPECIFIED_ERROR);
    Some(message.to_string())
}

/// Walks outputs[0].outputs[0].results.message.text. Every hop is optional;
/// anything absent or mistyped degrades to empty text.
pub fn extract_reply_text(reply: &Value) -> &str {
    reply
        .get("outputs")
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("outputs"))
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("results"))
        .and_then(|v| v.get("message"))
        .and_then(|v| v.get("text"))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

/// Splits the reply text on the marker and fills slots by position. The text
/// before the first marker is preamble and is dropped; fragments past the
/// fourth are ignored. Fragments are trimmed but otherwise kept verbatim.
pub fn split_sections(text: &str) -> Reading {
    let mut fragments = text.split(SECTION_MARKER);
    fragments.next();

    let mut slots: [Option<String>; Slot::ALL.len()] = Default::default();
    for slot in slots.iter_mut() {
        *slot = fragments.next().map(|fragment| fragment.trim().to_string());
    }
    Reading::new(slots)
}
