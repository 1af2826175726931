// file: src/upstream/client.rs
// description: One-shot HTTP adapter for the upstream completion API
// reference: https://docs.rs/reqwest

use crate::config::UpstreamConfig;
use crate::error::{RagError, Result};
use crate::upstream::protocol::{ChatMessage, ChatRequest, ChatResponse};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Thin call wrapper around an OpenAI-compatible `/chat/completions`
/// endpoint. No retries, no caching, no rate limiting; a failure propagates
/// once to the caller.
pub struct UpstreamClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        response_format: Option<Value>,
    ) -> Result<ChatResponse> {
        // Must short-circuit before any network I/O when no key is set.
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(RagError::MissingCredential)?;

        let url = endpoint(&self.base_url);
        let request = ChatRequest {
            model: model.to_string(),
            messages: messages.to_vec(),
            response_format,
        };

        debug!(
            "Requesting completion from {} with {} message(s)",
            url,
            messages.len()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Upstream request to {} failed: {}", url, e);
                RagError::UpstreamTransport(e)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            warn!("Upstream returned HTTP {}: {}", status, body);
            return Err(RagError::UpstreamStatus { status, body });
        }

        response.json::<ChatResponse>().await.map_err(|e| {
            warn!("Failed to decode completion body: {}", e);
            RagError::MalformedPayload(e.to_string())
        })
    }
}

fn endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;

    fn config_without_key() -> UpstreamConfig {
        UpstreamConfig {
            api_key: None,
            ..UpstreamConfig::default()
        }
    }

    #[test]
    fn test_endpoint_joining() {
        assert_eq!(
            endpoint("https://api.groq.com/openai/v1"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(
            endpoint("https://api.groq.com/openai/v1/"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let client = UpstreamClient::new(&config_without_key());
        let messages = [ChatMessage::user("hello")];

        let err = client
            .chat_completion("test-model", &messages, None)
            .await
            .unwrap_err();

        assert!(matches!(err, RagError::MissingCredential));
    }

    #[tokio::test]
    async fn test_blank_key_short_circuits() {
        let config = UpstreamConfig {
            api_key: Some("   ".to_string()),
            ..UpstreamConfig::default()
        };
        let client = UpstreamClient::new(&config);
        let messages = [ChatMessage::user("hello")];

        let err = client
            .chat_completion("test-model", &messages, None)
            .await
            .unwrap_err();

        assert!(matches!(err, RagError::MissingCredential));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_failure() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: Some("test-key".to_string()),
            ..UpstreamConfig::default()
        };
        let client = UpstreamClient::new(&config);
        let messages = [ChatMessage::user("hello")];

        let err = client
            .chat_completion("test-model", &messages, None)
            .await
            .unwrap_err();

        assert!(matches!(err, RagError::UpstreamTransport(_)));
    }
}
