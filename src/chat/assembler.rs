//! Builds the ordered message list the completion API expects.

use crate::openrouter::{Message, Role};

/// Prepends a single system message to the conversation history. The
/// history is passed through unmodified: no deduplication and no
/// token-budget trimming, so very long conversations will eventually
/// exceed the model's context window.
pub fn assemble(history: &[Message], system_prompt: &str) -> Vec<Message> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message::new(Role::System, system_prompt));
    messages.extend_from_slice(history);
    messages
}
