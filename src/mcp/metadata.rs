// file: src/mcp/metadata.rs
// description: Product-templated tool names, titles, and descriptions
// reference: internal tool contracts

use crate::config::ProductConfig;

/// Descriptive tool identity resolved once at registration time. The
/// configured product slug and name flow into the externally visible tool
/// names, so changing them changes what agents discover.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    pub search_name: String,
    pub search_title: String,
    pub search_description: String,
    pub answer_name: String,
    pub answer_title: String,
    pub answer_description: String,
}

impl ToolMetadata {
    pub fn from_product(product: &ProductConfig) -> Self {
        Self {
            search_name: format!("{}_document_search", product.slug),
            search_title: format!("{} Document Search", product.name),
            search_description: format!(
                "Search the {} documentation and return the most relevant \
                 excerpts, each with a source link when available.",
                product.name
            ),
            answer_name: format!("{}_question_answer", product.slug),
            answer_title: format!("{} Q&A", product.name),
            answer_description: format!(
                "Ask a question about {} and receive a concise plain-text \
                 answer grounded in its documentation.",
                product.name
            ),
        }
    }
}
