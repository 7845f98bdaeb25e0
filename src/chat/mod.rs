pub mod assembler;
pub mod core;
pub mod models;

pub use assembler::assemble;
pub use self::core::{Session, SubmitOutcome};
pub use models::{Conversation, ConversationEvent};
