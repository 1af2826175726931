// file: src/tools/search.rs
// description: Document search tool entry point
// reference: internal tool contracts

use crate::config::{Config, ProductConfig};
use crate::models::Snippet;
use crate::normalizer::normalize_documents;
use crate::upstream::{ChatMessage, UpstreamClient};
use crate::utils::OperationTimer;
use serde_json::{Value, json};
use tracing::warn;

/// Semantic document search over the upstream retrieval endpoint.
///
/// The entry point is infallible: any failure at any stage (missing
/// credential, transport, malformed payload) degrades to an empty result
/// with the detail routed to the diagnostic log. Callers only ever see
/// "some snippets" or "no snippets".
pub struct DocumentSearch {
    client: UpstreamClient,
    model: String,
    product: ProductConfig,
}

impl DocumentSearch {
    pub fn new(config: &Config) -> Self {
        Self {
            client: UpstreamClient::new(&config.upstream),
            model: config.upstream.search_model.clone(),
            product: config.product.clone(),
        }
    }

    pub async fn run(&self, query: &str) -> Vec<Snippet> {
        let query = query.trim();
        if query.is_empty() {
            warn!("Document search called without a usable query");
            return Vec::new();
        }

        let timer = OperationTimer::new("document_search");

        let messages = [
            ChatMessage::system(format!(
                "You are a retrieval engine for the {} documentation. \
                 Return the most relevant reference documents for the query.",
                self.product.name
            )),
            ChatMessage::user(query),
        ];

        let snippets = match self
            .client
            .chat_completion(&self.model, &messages, Some(citation_response_format()))
            .await
        {
            Ok(completion) => normalize_documents(&completion.first_content()),
            Err(e) => {
                warn!("Document search failed at {} stage: {}", e.stage(), e);
                Vec::new()
            }
        };

        timer.finish_with_count(snippets.len());
        snippets
    }
}

/// Schema descriptor for the schema-constrained completion call. Kept
/// permissive (`additionalProperties: true`) so upstream schema drift does
/// not reject otherwise-valid documents.
fn citation_response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "document_search_results",
            "schema": {
                "type": "object",
                "properties": {
                    "content": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "type": { "type": "string" },
                                "source": {},
                                "title": { "type": "string" },
                                "context": { "type": "string" },
                                "record_type": { "type": "string" },
                                "url": { "type": "string" }
                            },
                            "required": ["type", "source"],
                            "additionalProperties": true
                        }
                    }
                },
                "required": ["content"],
                "additionalProperties": true
            }
        }
    })
}
