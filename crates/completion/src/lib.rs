//! OpenAI-compatible chat-completions client.
//!
//! Implements [`studyhub_core::completion::CompletionService`] over HTTP so the
//! roadmap pipeline can run against any provider exposing
//! `POST {base_url}/chat/completions`.

pub mod api;
pub mod config;
pub mod messages;

pub use api::ChatCompletionsApi;
pub use config::CompletionConfig;
