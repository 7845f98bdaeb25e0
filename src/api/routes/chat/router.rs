//! Router for the chat API

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use crate::api::state::SharedState;
use crate::chat::SubmitOutcome;
use super::public;

/// Submit a question and return the assistant's reply once the
/// completion finishes. Per-request failures are returned inline, the
/// pending user turn stays in the transcript.
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> impl IntoResponse {
    let mut state = state.lock().await;

    match state.session.submit(&payload.message).await {
        SubmitOutcome::Ignored => StatusCode::NO_CONTENT.into_response(),
        SubmitOutcome::Answered(text) => {
            axum::Json(public::ChatResponse::new(&text)).into_response()
        }
        SubmitOutcome::Failed(e) => (
            StatusCode::BAD_GATEWAY,
            axum::Json(public::ChatErrorResponse::new(&e.to_string())),
        )
            .into_response(),
    }
}

/// Get the transcript of the active session in insertion order
async fn transcript_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.lock().await;
    axum::Json(public::ChatTranscriptResponse {
        transcript: state.session.messages(),
    })
}

/// Clear the conversation
async fn clear_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.session.clear();
    axum::Json(public::ChatResponse::new("Chat history cleared"))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler).get(transcript_handler))
        .route("/clear", post(clear_handler))
}
