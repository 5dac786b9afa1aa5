//! Chat Route

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use reply_resolver::resolve_detailed;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::AppState;

/// Request body for the chat endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    /// Free-text message; missing or null is treated as empty
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for the chat endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Body returned for payloads that could not be parsed
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Resolve a reply for one chat message
pub async fn post_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Option<ChatRequest>>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request.unwrap_or_default(),
        Err(rejection) => {
            warn!("Rejected chat payload: {}", rejection.body_text());
            let body = ErrorResponse {
                error: rejection.body_text(),
            };
            return (rejection.status(), Json(body)).into_response();
        }
    };

    let resolution = resolve_detailed(
        request.message.as_deref(),
        &state.rules,
        &mut rand::thread_rng(),
    );
    let outcome = resolution.outcome.as_str();

    metrics::counter!("chat_requests_total", "outcome" => outcome).increment(1);
    debug!(outcome, "Chat reply resolved");

    Json(ChatResponse {
        reply: resolution.reply,
    })
    .into_response()
}
