use std::sync::Arc;

use tokio::sync::Mutex;

use crate::chat::Session;
use crate::core::AppConfig;

pub struct AppState {
    pub session: Session,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(session: Session, config: AppConfig) -> Self {
        Self { session, config }
    }
}

// The mutex serializes interactions: only one submit can be dispatched
// at a time and it suspends on the network call.
pub type SharedState = Arc<Mutex<AppState>>;
