// src/error.rs
use axum::extract::rejection::JsonRejection;

#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    /// The vendor answered with a non-success status.
    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The vendor answered 2xx but the payload was not usable.
    #[error("{0}")]
    Vendor(String),

    #[error("{0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for RelayError {
    fn from(rejection: JsonRejection) -> Self {
        RelayError::InvalidBody(rejection.body_text())
    }
}

impl RelayError {
    /// Build an `Api` error from a vendor error body, preferring `error.message`.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "status code (no body)".to_string()
                } else {
                    body.to_string()
                }
            });
        RelayError::Api { status, message }
    }
}
