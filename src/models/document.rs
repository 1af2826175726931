// file: src/models/document.rs
// description: Citation document model returned by the upstream retrieval endpoint
// reference: internal data structures

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One retrieved reference unit. The upstream service evolves its schema
/// independently, so only `type` and `source` are required and everything
/// unrecognized is kept in `extra` instead of being rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type")]
    pub kind: String,

    /// Open-ended payload; its shape varies by upstream producer. It may be
    /// an object with nested text content, a plain string, or anything else.
    pub source: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Top-level search response shape: an ordered document collection under
/// `content`, with unknown siblings preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub content: Option<Vec<Document>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
