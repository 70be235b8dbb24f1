//! Seam between the roadmap pipeline and a text-completion provider.
//!
//! The provider is treated as an untrusted free-text generator: it receives a
//! system + user prompt and returns whatever text it produced. Implementations
//! live outside this crate (`studyhub-completion` for the HTTP client, stubs
//! in tests).

use async_trait::async_trait;

/// A single-turn completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Instructions establishing the assistant's role.
    pub system: String,
    /// The task itself.
    pub user: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// Failure talking to the completion provider.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    /// The request never produced an HTTP response (network, DNS, TLS, timeout).
    #[error("completion request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("completion provider returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The provider answered 2xx but with no usable message.
    #[error("completion provider returned no content")]
    EmptyResponse,
}

/// A text-completion provider.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Run one completion and return the raw generated text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
