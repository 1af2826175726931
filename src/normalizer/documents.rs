// file: src/normalizer/documents.rs
// description: Lenient normalization of upstream citation payloads into snippets
// reference: internal data structures

use crate::models::{Document, SearchPayload, Snippet};
use serde_json::Value;
use tracing::{debug, warn};

const NO_CONTENT_PLACEHOLDER: &str = "No content available";

/// Flatten a raw completion `content` value into an ordered snippet list.
///
/// The upstream endpoint has shipped several shapes of this payload: a
/// JSON-encoded string, an already-structured object, and a
/// schema-constrained object. All of them funnel through here. Malformed
/// input of any kind yields an empty list, never an error; relative
/// document order is preserved.
pub fn normalize_documents(raw: &Value) -> Vec<Snippet> {
    let value = match raw {
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Discarding unparseable search payload: {}", e);
                return Vec::new();
            }
        },
        other => other.clone(),
    };

    // One invalid document rejects the whole batch; the batch then degrades
    // to empty like every other failure at this boundary.
    let payload: SearchPayload = match serde_json::from_value(value) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Search payload failed validation: {}", e);
            return Vec::new();
        }
    };

    let documents = payload.content.unwrap_or_default();
    debug!("Normalizing {} retrieved document(s)", documents.len());

    documents.iter().map(snippet_from_document).collect()
}

fn snippet_from_document(document: &Document) -> Snippet {
    let mut text = body_from_source(&document.source)
        .unwrap_or_else(|| NO_CONTENT_PLACEHOLDER.to_string());

    if let Some(title) = &document.title {
        text = format!("{}\n\n{}", title, text);
    }

    if let Some(url) = &document.url {
        text = format!("{}\n\nSource: {}", text, url);
    }

    Snippet::new(text)
}

/// Derive the text body of one document, in preference order: nested
/// sub-item texts, a plain `text` field, then a stringified `source`.
fn body_from_source(source: &Value) -> Option<String> {
    if let Some(items) = source.get("content").and_then(Value::as_array) {
        let parts: Vec<&str> = items
            .iter()
            .filter_map(|item| item.get("text").and_then(Value::as_str))
            .collect();
        if !parts.is_empty() {
            return Some(parts.join("\n"));
        }
    }

    if let Some(text) = source.get("text").and_then(Value::as_str) {
        return Some(text.to_string());
    }

    match source {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_count_and_order_preserved() {
        let raw = json!({
            "content": [
                { "type": "document", "source": { "text": "first" } },
                { "type": "document", "source": { "text": "second" } },
                { "type": "document", "source": { "text": "third" } }
            ]
        });

        let snippets = normalize_documents(&raw);
        assert_eq!(snippets.len(), 3);
        assert_eq!(snippets[0].text, "first");
        assert_eq!(snippets[1].text, "second");
        assert_eq!(snippets[2].text, "third");
    }

    #[test]
    fn test_json_encoded_string_payload() {
        let encoded = json!({
            "content": [{ "type": "document", "source": { "text": "hello" } }]
        })
        .to_string();

        let snippets = normalize_documents(&Value::String(encoded));
        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].text, "hello");
    }

    #[test]
    fn test_invalid_json_string_yields_empty() {
        let snippets = normalize_documents(&Value::String("{not valid json".to_string()));
        assert!(snippets.is_empty());
    }

    #[test]
    fn test_missing_content_field_yields_empty() {
        let snippets = normalize_documents(&json!({ "status": "ok" }));
        assert!(snippets.is_empty());
    }

    #[test]
    fn test_non_sequence_content_yields_empty() {
        let snippets = normalize_documents(&json!({ "content": "not a list" }));
        assert!(snippets.is_empty());
    }

    #[test]
    fn test_one_invalid_document_rejects_batch() {
        let raw = json!({
            "content": [
                { "type": "document", "source": { "text": "fine" } },
                { "type": "document" }
            ]
        });

        assert!(normalize_documents(&raw).is_empty());
    }

    #[test]
    fn test_nested_source_texts_concatenated() {
        let raw = json!({
            "content": [{
                "type": "document",
                "source": {
                    "content": [
                        { "type": "text", "text": "A" },
                        { "type": "text", "text": "B" }
                    ]
                }
            }]
        });

        let snippets = normalize_documents(&raw);
        assert_eq!(snippets[0].text, "A\nB");
    }

    #[test]
    fn test_title_and_url_wrapping() {
        let raw = json!({
            "content": [{
                "type": "document",
                "source": { "text": "Hello" },
                "title": "Intro",
                "url": "http://x"
            }]
        });

        let snippets = normalize_documents(&raw);
        assert_eq!(snippets[0].text, "Intro\n\nHello\n\nSource: http://x");
    }

    #[test]
    fn test_plain_string_source_used_verbatim() {
        let raw = json!({
            "content": [{ "type": "document", "source": "plain string" }]
        });

        let snippets = normalize_documents(&raw);
        assert_eq!(snippets[0].text, "plain string");
    }

    #[test]
    fn test_numeric_source_stringified() {
        let raw = json!({
            "content": [{ "type": "document", "source": 42 }]
        });

        let snippets = normalize_documents(&raw);
        assert_eq!(snippets[0].text, "42");
    }

    #[test]
    fn test_empty_source_falls_back_to_placeholder() {
        let raw = json!({
            "content": [
                { "type": "document", "source": "" },
                { "type": "document", "source": null }
            ]
        });

        let snippets = normalize_documents(&raw);
        assert_eq!(snippets[0].text, "No content available");
        assert_eq!(snippets[1].text, "No content available");
    }

    #[test]
    fn test_placeholder_still_wrapped_by_title_and_url() {
        let raw = json!({
            "content": [{
                "type": "document",
                "source": null,
                "title": "Orphan",
                "url": "http://y"
            }]
        });

        let snippets = normalize_documents(&raw);
        assert_eq!(
            snippets[0].text,
            "Orphan\n\nNo content available\n\nSource: http://y"
        );
    }

    #[test]
    fn test_sub_items_without_text_fall_through_to_text_field() {
        let raw = json!({
            "content": [{
                "type": "document",
                "source": {
                    "content": [{ "type": "image", "id": "img-1" }],
                    "text": "caption"
                }
            }]
        });

        let snippets = normalize_documents(&raw);
        assert_eq!(snippets[0].text, "caption");
    }

    #[test]
    fn test_unknown_document_fields_tolerated() {
        let raw = json!({
            "content": [{
                "type": "document",
                "source": { "text": "hello" },
                "relevance": 0.5,
                "record_type": "kb"
            }],
            "model_version": "2024-11"
        });

        let snippets = normalize_documents(&raw);
        assert_eq!(snippets.len(), 1);
    }
}
