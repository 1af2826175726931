// file: src/normalizer/answer.rs
// description: Normalization of plain-text question-answer completions
// reference: internal data structures

use serde_json::Value;
use tracing::debug;

/// Wrap a QA completion `content` value as a single answer string.
///
/// The QA endpoint returns prose, not structured citations, so there is no
/// JSON parsing and no schema here: a non-blank string passes through
/// unmodified, anything else is treated as "no usable content".
pub fn normalize_answer(raw: &Value) -> Option<String> {
    match raw {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        other => {
            debug!("Discarding non-text answer payload: {}", kind_of(other));
            None
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "empty string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
