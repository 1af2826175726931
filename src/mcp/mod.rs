// file: src/mcp/mod.rs
// description: MCP (Model Context Protocol) server for agentic tool integration
// reference: https://docs.rs/rmcp

pub mod metadata;
pub mod server;

pub use metadata::ToolMetadata;
pub use server::RagToolsMcp;
