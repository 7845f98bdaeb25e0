mod core;

pub use self::core::{
    BoxedBackend, CompletionBackend, CompletionConfig, CompletionError, Message,
    OpenRouterClient, Role, completion,
};
