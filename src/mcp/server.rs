// file: src/mcp/server.rs
// description: MCP server exposing the document search and question-answer tools
// reference: https://docs.rs/rmcp

use crate::config::Config;
use crate::mcp::metadata::ToolMetadata;
use crate::tools::{DocumentSearch, QuestionAnswer};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool, ToolAnnotations,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchArgs {
    /// Free-text search query
    #[schemars(description = "Free-text search query")]
    pub query: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AnswerArgs {
    /// Free-text question
    #[schemars(description = "Free-text question to answer")]
    pub question: String,
}

/// Tool names are templated from the configured product identity, so the
/// router is implemented by hand instead of through the attribute macros
/// (which only support names fixed at compile time).
#[derive(Clone)]
pub struct RagToolsMcp {
    search: Arc<DocumentSearch>,
    answer: Arc<QuestionAnswer>,
    metadata: Arc<ToolMetadata>,
    instructions: String,
}

impl RagToolsMcp {
    pub fn new(config: &Config) -> Self {
        Self {
            search: Arc::new(DocumentSearch::new(config)),
            answer: Arc::new(QuestionAnswer::new(config)),
            metadata: Arc::new(ToolMetadata::from_product(&config.product)),
            instructions: format!(
                "Retrieval tools for {}: use the document search tool to find \
                 relevant excerpts and the question-answer tool for direct \
                 answers. Both return an empty result when nothing was found.",
                config.product.name
            ),
        }
    }

    pub fn metadata(&self) -> &ToolMetadata {
        &self.metadata
    }

    pub fn tool_definitions(&self) -> Vec<Tool> {
        let annotations = |title: &str| ToolAnnotations {
            title: Some(title.to_string()),
            read_only_hint: Some(true),
            destructive_hint: Some(false),
            idempotent_hint: Some(true),
            open_world_hint: Some(true),
        };

        let mut search = Tool::new(
            self.metadata.search_name.clone(),
            self.metadata.search_description.clone(),
            input_schema::<SearchArgs>(),
        );
        search.annotations = Some(annotations(&self.metadata.search_title));

        let mut answer = Tool::new(
            self.metadata.answer_name.clone(),
            self.metadata.answer_description.clone(),
            input_schema::<AnswerArgs>(),
        );
        answer.annotations = Some(annotations(&self.metadata.answer_title));

        vec![search, answer]
    }
}

impl ServerHandler for RagToolsMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions.clone()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.tool_definitions(),
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let name = request.name.as_ref();

        if name == self.metadata.search_name {
            let query = string_argument(request.arguments.as_ref(), "query");
            info!("MCP: document search for: {}", query);

            let contents: Vec<Content> = self
                .search
                .run(&query)
                .await
                .into_iter()
                .map(|snippet| Content::text(snippet.text))
                .collect();
            return Ok(CallToolResult::success(contents));
        }

        if name == self.metadata.answer_name {
            let question = string_argument(request.arguments.as_ref(), "question");
            info!("MCP: answering question: {}", question);

            let contents = match self.answer.run(&question).await {
                Some(text) => vec![Content::text(text)],
                None => Vec::new(),
            };
            return Ok(CallToolResult::success(contents));
        }

        Err(McpError::invalid_params(
            format!("Unknown tool: {}", name),
            None,
        ))
    }
}

/// The hosting layer enforces the argument type; here only the presence of
/// a usable value matters. A missing or non-string argument becomes an
/// empty string, which the tools treat as "no results".
fn string_argument(arguments: Option<&JsonObject>, key: &str) -> String {
    arguments
        .and_then(|args| args.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    let schema = schemars::schema_for!(T);
    let value = serde_json::to_value(schema).unwrap_or_default();
    Arc::new(value.as_object().cloned().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definitions_follow_configured_slug() {
        let mut config = Config::default_config();
        config.product.slug = "acme".to_string();
        config.product.name = "Acme".to_string();

        let server = RagToolsMcp::new(&config);
        let tools = server.tool_definitions();

        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name.as_ref(), "acme_document_search");
        assert_eq!(tools[1].name.as_ref(), "acme_question_answer");
    }

    #[test]
    fn test_tool_annotations_are_read_only() {
        let server = RagToolsMcp::new(&Config::default_config());

        for tool in server.tool_definitions() {
            let annotations = tool.annotations.expect("annotations set");
            assert_eq!(annotations.read_only_hint, Some(true));
            assert_eq!(annotations.destructive_hint, Some(false));
            assert_eq!(annotations.open_world_hint, Some(true));
        }
    }

    #[test]
    fn test_input_schema_requires_single_string_argument() {
        let schema = input_schema::<SearchArgs>();
        let value = Value::Object((*schema).clone());
        assert_eq!(value["properties"]["query"]["type"], json!("string"));
    }

    #[test]
    fn test_string_argument_extraction() {
        let mut args = JsonObject::new();
        args.insert("query".to_string(), json!("hello"));
        assert_eq!(string_argument(Some(&args), "query"), "hello");
        assert_eq!(string_argument(Some(&args), "question"), "");
        assert_eq!(string_argument(None, "query"), "");

        let mut args = JsonObject::new();
        args.insert("query".to_string(), json!(42));
        assert_eq!(string_argument(Some(&args), "query"), "");
    }
}
