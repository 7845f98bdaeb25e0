use std::env;

use crate::openrouter::{CompletionConfig, CompletionError};

/// The study-assistant persona sent as the system message on every
/// request.
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are EduMate, a helpful and friendly study \
assistant for university students. You specialize in explaining computer science \
concepts, programming, mathematics, and other academic topics in simple, clear terms. \
Always be encouraging, patient, and provide examples when helpful. Keep your responses \
concise but comprehensive.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub system_message: String,
}

impl AppConfig {
    /// Reads configuration from the environment. A missing API key is
    /// a fatal configuration error surfaced at startup, there is no
    /// embedded fallback credential.
    pub fn from_env() -> Result<Self, CompletionError> {
        let api_key = env::var("OPENROUTER_API_KEY").map_err(|_| {
            CompletionError::Configuration("OPENROUTER_API_KEY is not set".to_string())
        })?;
        let api_hostname =
            env::var("EDUMATE_API_HOST").unwrap_or_else(|_| "https://openrouter.ai".to_string());
        let model =
            env::var("EDUMATE_MODEL").unwrap_or_else(|_| "openai/gpt-4o-mini".to_string());
        let system_message = env::var("EDUMATE_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_MESSAGE.to_string());

        Ok(Self {
            api_hostname,
            api_key,
            model,
            system_message,
        })
    }

    pub fn completion_config(&self) -> CompletionConfig {
        CompletionConfig::new(&self.api_hostname, &self.api_key, &self.model)
    }
}
