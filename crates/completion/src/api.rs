//! HTTP client for an OpenAI-compatible chat-completions endpoint.

use async_trait::async_trait;
use studyhub_core::completion::{CompletionError, CompletionRequest, CompletionService};

use crate::config::CompletionConfig;
use crate::messages::{ChatRequest, ChatResponse};

/// Errors from the chat-completions HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum ChatApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Chat API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response without any message content.
    #[error("Chat API returned no content")]
    EmptyResponse,
}

impl From<ChatApiError> for CompletionError {
    fn from(err: ChatApiError) -> Self {
        match err {
            ChatApiError::Request(e) => CompletionError::Transport(e.to_string()),
            ChatApiError::ApiError { status, body } => CompletionError::Api { status, body },
            ChatApiError::EmptyResponse => CompletionError::EmptyResponse,
        }
    }
}

/// Client for a single chat-completions provider.
pub struct ChatCompletionsApi {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl ChatCompletionsApi {
    /// Create a client with its own connection pool and the configured timeout.
    pub fn new(config: CompletionConfig) -> Result<Self, ChatApiError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Send one chat completion and return the first choice's text.
    pub async fn chat(&self, request: &CompletionRequest) -> Result<String, ChatApiError> {
        let body = ChatRequest::from_completion(&self.config.model, request);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let parsed: ChatResponse = response.json().await?;

        if let Some(choice) = parsed.choices.first() {
            if choice.finish_reason.as_deref() == Some("length") {
                tracing::warn!(
                    model = %self.config.model,
                    max_tokens = request.max_tokens,
                    "Completion truncated at token limit"
                );
            }
        }

        parsed.first_content().ok_or(ChatApiError::EmptyResponse)
    }

    /// Return the response unchanged on 2xx, or an [`ChatApiError::ApiError`]
    /// with the status and body text otherwise.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ChatApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ChatApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CompletionService for ChatCompletionsApi {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        tracing::debug!(model = %self.config.model, "Sending chat completion request");
        Ok(self.chat(request).await?)
    }
}
