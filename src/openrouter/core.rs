//! Client for an OpenRouter-style chat completion API (OpenAI
//! compatible). One request per interaction, no retries, no
//! streaming.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Default sampling temperature sent with every completion request.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default cap on generated tokens per completion.
pub const DEFAULT_MAX_TOKENS: u32 = 1500;

/// Bound on the outbound HTTP call. This is the only
/// cancellation-like mechanism, there is no retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// OpenRouter asks callers to identify themselves with these headers
// so usage shows up attributed in their dashboard.
const HTTP_REFERER: &str = "http://localhost:2222";
const X_TITLE: &str = "EduMate Study Assistant";

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

/// A single turn in a conversation. Immutable once created, ordering
/// between messages is the conversation order.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Network-level failure including the request timeout.
    #[error("API request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("API returned {status}: {body}")]
    Provider { status: u16, body: String },

    /// The response body didn't have the expected shape.
    #[error("Unexpected response from API: {0}")]
    MalformedResponse(String),

    /// Required configuration is missing. Raised at startup, never
    /// during a request.
    #[error("Missing configuration: {0}")]
    Configuration(String),
}

/// Per-request knobs for the completion endpoint.
#[derive(Clone, Debug)]
pub struct CompletionConfig {
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

impl CompletionConfig {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            stream: false,
        }
    }
}

/// Requests the next chat completion for `messages` and returns the
/// first choice's content. The transcript must already include the
/// system message, this function sends it as-is.
pub async fn completion(
    messages: &[Message],
    config: &CompletionConfig,
) -> Result<String, CompletionError> {
    let payload = json!({
        "model": config.model,
        "messages": messages,
        "temperature": config.temperature,
        "max_tokens": config.max_tokens,
        "stream": config.stream,
    });
    let url = format!(
        "{}/api/v1/chat/completions",
        config.api_hostname.trim_end_matches("/")
    );
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(&config.api_key)
        .header("Content-Type", "application/json")
        .header("HTTP-Referer", HTTP_REFERER)
        .header("X-Title", X_TITLE)
        .timeout(REQUEST_TIMEOUT)
        .json(&payload)
        .send()
        .await
        .map_err(|e| CompletionError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| CompletionError::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(CompletionError::Provider {
            status: status.as_u16(),
            body,
        });
    }

    let resp: Value = serde_json::from_str(&body)
        .map_err(|e| CompletionError::MalformedResponse(format!("{}: {}", e, body)))?;

    resp["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            CompletionError::MalformedResponse(format!(
                "missing choices[0].message.content in: {}",
                resp
            ))
        })
}

/// Abstraction over the completion provider so callers can swap in a
/// test double instead of making network calls.
#[async_trait]
pub trait CompletionBackend {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError>;
}

pub type BoxedBackend = Box<dyn CompletionBackend + Send + Sync + 'static>;

/// Production backend that calls the configured OpenRouter-compatible
/// endpoint.
pub struct OpenRouterClient {
    config: CompletionConfig,
}

impl OpenRouterClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CompletionBackend for OpenRouterClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        completion(messages, &self.config).await
    }
}
