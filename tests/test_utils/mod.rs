//! Test utilities for integration tests
use std::sync::Arc;

use async_trait::async_trait;
use axum::{Router, body::Body};
use tokio::sync::Mutex;

use edumate::api::{AppState, app};
use edumate::chat::Session;
use edumate::core::AppConfig;
use edumate::openrouter::{BoxedBackend, CompletionBackend, CompletionError, Message};

/// Backend double that returns a canned reply or a canned provider
/// failure without touching the network.
pub struct CannedBackend {
    reply: Result<String, String>,
}

impl CannedBackend {
    pub fn answering(reply: &str) -> BoxedBackend {
        Box::new(Self {
            reply: Ok(reply.to_string()),
        })
    }

    pub fn failing(body: &str) -> BoxedBackend {
        Box::new(Self {
            reply: Err(body.to_string()),
        })
    }
}

#[async_trait]
impl CompletionBackend for CannedBackend {
    async fn complete(&self, _messages: &[Message]) -> Result<String, CompletionError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(body) => Err(CompletionError::Provider {
                status: 500,
                body: body.clone(),
            }),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        api_hostname: String::from("https://openrouter.ai"),
        api_key: String::from("test-api-key"),
        model: String::from("openai/gpt-4o-mini"),
        system_message: String::from("You are EduMate."),
    }
}

/// Creates a test application router backed by the given completion
/// backend. Each call owns an independent session.
pub fn test_app(backend: BoxedBackend) -> Router {
    let config = test_config();
    let session = Session::new(&config.system_message, backend);
    let app_state = AppState::new(session, config);
    app(Arc::new(Mutex::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body was not utf-8")
}
