//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::openrouter::Message;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    message: String,
}

impl ChatResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ChatErrorResponse {
    error: String,
}

impl ChatErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<Message>,
}
