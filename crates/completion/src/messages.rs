//! Wire types for the chat-completions endpoint.
//!
//! Only the fields this client reads or writes are modelled; unknown response
//! fields are ignored.

use serde::{Deserialize, Serialize};
use studyhub_core::completion::CompletionRequest;

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// One message in the conversation.
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatRequest<'a> {
    /// Build a system + user request from a provider-neutral completion request.
    pub fn from_completion(model: &'a str, request: &'a CompletionRequest) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

/// Response body from `POST /chat/completions`.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Text of the first choice, if any and non-empty.
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_system_then_user() {
        let completion = CompletionRequest {
            system: "be terse".into(),
            user: "plan Rust".into(),
            temperature: 0.5,
            max_tokens: 2500,
        };
        let body = serde_json::to_value(ChatRequest::from_completion("gpt-x", &completion)).unwrap();

        assert_eq!(body["model"], "gpt-x");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "be terse");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "plan Rust");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["max_tokens"], 2500);
    }

    #[test]
    fn first_content_extracted() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "{\"goal\":\"x\"}"}, "finish_reason": "stop"}
            ],
            "usage": {"total_tokens": 12}
        }))
        .unwrap();
        assert_eq!(response.first_content().as_deref(), Some("{\"goal\":\"x\"}"));
    }

    #[test]
    fn missing_or_null_content_is_none() {
        let empty: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(empty.first_content().is_none());

        let null: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(null.first_content().is_none());
    }
}
