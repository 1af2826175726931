// file: src/models/snippet.rs
// description: Flattened plain-text result unit returned to tool callers
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// Human-readable text derived from a [`Document`](super::Document),
/// optionally carrying a trailing `Source: {url}` line. Documents never
/// leak past the normalizer; callers only ever see snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub text: String,
}

impl Snippet {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
