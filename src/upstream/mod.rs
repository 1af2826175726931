// file: src/upstream/mod.rs
// description: upstream completion API module exports
// reference: internal module structure

pub mod client;
pub mod protocol;

pub use client::UpstreamClient;
pub use protocol::{ChatMessage, ChatRequest, ChatResponse, Role};
