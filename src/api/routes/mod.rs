use axum::Router;

use crate::api::state::SharedState;

pub mod chat;

pub fn router() -> Router<SharedState> {
    Router::new().nest("/chat", chat::router())
}
