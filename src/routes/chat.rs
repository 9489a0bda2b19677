use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::warn;

use crate::{
    error::RelayError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::ask,
    state::SharedState,
};

// Every outcome is a 200; failures carry `{ error }` instead of `{ reply }`.
pub async fn ask_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let result = match payload {
        Ok(Json(req)) => {
            let message = req.message.unwrap_or_default();
            ask(state.api.as_ref(), &state.models, &message).await
        }
        Err(rejection) => Err(RelayError::from(rejection)),
    };

    match result {
        Ok(reply) => Json(ChatResponse::Reply { reply }),
        Err(err) => {
            warn!(error = %err, "chat relay failed");
            Json(ChatResponse::Error { error: err.to_string() })
        }
    }
}
