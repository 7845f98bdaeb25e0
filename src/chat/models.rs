//! The core models for managing a stateful chat with an LLM.
use tokio::sync::broadcast;

use crate::openrouter::Message;

/// Emitted whenever the conversation changes so a front end can
/// redraw without the core knowing anything about rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum ConversationEvent {
    Appended,
    Cleared,
}

/// Ordered history of turns for one session. Turns are only ever
/// appended, the only other mutation is clearing the whole
/// conversation. The system message is not part of the conversation,
/// it gets injected when assembling a request.
pub struct Conversation {
    turns: Vec<Message>,
    events: broadcast::Sender<ConversationEvent>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            turns: Vec::new(),
            events,
        }
    }

    pub fn push(&mut self, msg: Message) {
        self.turns.push(msg);
        // A send error only means there are no subscribers
        let _ = self.events.send(ConversationEvent::Appended);
    }

    /// Empties the conversation. Idempotent.
    pub fn clear(&mut self) {
        self.turns.clear();
        let _ = self.events.send(ConversationEvent::Cleared);
    }

    /// Snapshot of all turns in insertion order.
    pub fn messages(&self) -> Vec<Message> {
        self.turns.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Subscribe to change notifications. Slow or dropped receivers
    /// never block mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }
}
