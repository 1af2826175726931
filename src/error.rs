// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RagError>;

#[derive(Error, Debug)]
pub enum RagError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No API key configured")]
    MissingCredential,

    #[error("Upstream transport failure: {0}")]
    UpstreamTransport(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl RagError {
    /// Every tool-boundary failure degrades to an empty result; this label
    /// only feeds the diagnostic log.
    pub fn stage(&self) -> &'static str {
        match self {
            RagError::Config(_) => "config",
            RagError::MissingCredential => "credentials",
            RagError::UpstreamTransport(_) | RagError::UpstreamStatus { .. } => "transport",
            RagError::MalformedPayload(_) => "payload",
            RagError::Validation(_) => "validation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_labels() {
        assert_eq!(RagError::MissingCredential.stage(), "credentials");
        assert_eq!(
            RagError::UpstreamStatus {
                status: 500,
                body: "boom".to_string()
            }
            .stage(),
            "transport"
        );
        assert_eq!(
            RagError::MalformedPayload("bad json".to_string()).stage(),
            "payload"
        );
    }
}
