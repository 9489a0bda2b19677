use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{
    error::RelayError,
    message::{ErrorBody, SpeechRequest},
    services::speech::synthesize,
    state::SharedState,
};

pub const AUDIO_MPEG: &str = "audio/mpeg";

/// Success is an `audio/mpeg` body, failure a JSON `{ error }`; both are 200.
pub async fn voice_handler(
    State(state): State<SharedState>,
    payload: Result<Json<SpeechRequest>, JsonRejection>,
) -> Response {
    let result = match payload {
        Ok(Json(req)) => {
            let text = req.text.unwrap_or_default();
            synthesize(state.api.as_ref(), &state.models, &text).await
        }
        Err(rejection) => Err(RelayError::from(rejection)),
    };

    match result {
        Ok(audio) => ([(header::CONTENT_TYPE, AUDIO_MPEG)], audio).into_response(),
        Err(err) => {
            warn!(error = %err, "speech relay failed");
            Json(ErrorBody { error: err.to_string() }).into_response()
        }
    }
}
