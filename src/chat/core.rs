//! One chat session: owns the conversation and runs a single
//! user-submit-to-response interaction against a completion backend.

use crate::chat::assembler::assemble;
use crate::chat::models::Conversation;
use crate::openrouter::{BoxedBackend, CompletionError, Message, Role};

/// Result of submitting input to a session. Errors are recovered
/// here, a failed interaction never panics or propagates upward.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only input, treated as a no-op.
    Ignored,
    /// The assistant's reply, already appended to the conversation.
    Answered(String),
    /// The request failed. The user's turn stays in the conversation
    /// without an answer.
    Failed(CompletionError),
}

/// A single user's chat session. One interaction runs at a time, a
/// multi-threaded host must serialize calls to `submit` (the API
/// server wraps the session in a mutex for this reason).
pub struct Session {
    system_message: String,
    conversation: Conversation,
    backend: BoxedBackend,
}

impl Session {
    pub fn new(system_message: &str, backend: BoxedBackend) -> Self {
        Self {
            system_message: system_message.to_string(),
            conversation: Conversation::new(),
            backend,
        }
    }

    /// Runs one interaction: validate the input, append the user
    /// turn, request a completion, and append the reply on success.
    /// On failure the pending user turn is deliberately kept so the
    /// question stays visible without its answer.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        if input.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.conversation.push(Message::new(Role::User, input));

        let messages = assemble(&self.conversation.messages(), &self.system_message);

        match self.backend.complete(&messages).await {
            Ok(text) => {
                self.conversation.push(Message::new(Role::Assistant, &text));
                SubmitOutcome::Answered(text)
            }
            Err(e) => {
                tracing::error!("Chat completion failed: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }

    pub fn clear(&mut self) {
        self.conversation.clear();
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Snapshot of the conversation for rendering.
    pub fn messages(&self) -> Vec<Message> {
        self.conversation.messages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use crate::openrouter::CompletionBackend;

    /// Backend double that records the messages it was asked to
    /// complete and returns a canned result.
    struct MockBackend {
        reply: Result<String, ()>,
        seen: Arc<Mutex<Vec<Vec<Message>>>>,
    }

    impl MockBackend {
        fn answering(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(()),
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for MockBackend {
        async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(CompletionError::Provider {
                    status: 500,
                    body: "upstream broke".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_submit_appends_user_and_assistant_turns() {
        let mut session = Session::new("You are EduMate.", Box::new(MockBackend::answering("X")));

        let outcome = session.submit("hi").await;

        assert!(matches!(outcome, SubmitOutcome::Answered(ref text) if text == "X"));
        assert_eq!(
            session.messages(),
            vec![
                Message::new(Role::User, "hi"),
                Message::new(Role::Assistant, "X"),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_sends_system_message_and_full_history() {
        let backend = MockBackend::answering("ok");
        let seen = Arc::clone(&backend.seen);
        let mut session = Session::new("You are EduMate.", Box::new(backend));

        session.submit("first").await;
        session.submit("second").await;

        // Inspect what the backend received on the second call
        let seen = seen.lock().unwrap();
        let second_request = &seen[1];
        assert_eq!(second_request[0], Message::new(Role::System, "You are EduMate."));
        assert_eq!(second_request[1], Message::new(Role::User, "first"));
        assert_eq!(second_request[2], Message::new(Role::Assistant, "ok"));
        assert_eq!(second_request[3], Message::new(Role::User, "second"));
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_pending_user_turn() {
        let mut session = Session::new("You are EduMate.", Box::new(MockBackend::failing()));

        let outcome = session.submit("hi").await;

        match outcome {
            SubmitOutcome::Failed(e) => assert!(!e.to_string().is_empty()),
            other => panic!("Expected Failed, got {:?}", other),
        }
        // No rollback of the user turn and no assistant turn
        assert_eq!(session.messages(), vec![Message::new(Role::User, "hi")]);
    }

    #[tokio::test]
    async fn test_submit_whitespace_is_a_noop() {
        let mut session = Session::new("You are EduMate.", Box::new(MockBackend::answering("X")));

        assert!(matches!(session.submit("").await, SubmitOutcome::Ignored));
        assert!(matches!(session.submit("   \t\n").await, SubmitOutcome::Ignored));
        assert!(session.messages().is_empty());
    }

    #[tokio::test]
    async fn test_clear_resets_conversation() {
        let mut session = Session::new("You are EduMate.", Box::new(MockBackend::answering("X")));

        session.submit("hi").await;
        assert_eq!(session.messages().len(), 2);

        session.clear();
        assert!(session.messages().is_empty());
    }
}
