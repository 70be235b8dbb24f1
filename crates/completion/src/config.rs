use std::time::Duration;

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Default chat model.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the completion provider.
#[derive(Clone)]
pub struct CompletionConfig {
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Base URL without trailing slash, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CompletionConfig {
    /// Build a config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default                     |
    /// |---------------------------|-----------------------------|
    /// | `OPENAI_API_KEY`          | -- (unset disables generation) |
    /// | `OPENAI_BASE_URL`         | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`            | `gpt-3.5-turbo`             |
    /// | `COMPLETION_TIMEOUT_SECS` | `60`                        |
    ///
    /// Returns `None` when no API key is set.
    ///
    /// # Panics
    ///
    /// Panics if `COMPLETION_TIMEOUT_SECS` is set but not a valid u64.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let timeout_secs: u64 = std::env::var("COMPLETION_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("COMPLETION_TIMEOUT_SECS must be a valid u64");

        Some(Self {
            api_key,
            base_url,
            model,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
