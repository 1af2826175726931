// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod normalizer;
pub mod tools;
pub mod upstream;
pub mod utils;

pub use config::{Config, ProductConfig, UpstreamConfig};
pub use error::{RagError, Result};
pub use mcp::{RagToolsMcp, ToolMetadata};
pub use models::{Document, SearchPayload, Snippet};
pub use normalizer::{normalize_answer, normalize_documents};
pub use tools::{DocumentSearch, QuestionAnswer};
pub use upstream::{ChatMessage, UpstreamClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _metadata = ToolMetadata::from_product(&ProductConfig::default());
    }
}
