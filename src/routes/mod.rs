// src/routes/mod.rs
pub mod chat;
pub mod voice;

use crate::message::HealthResponse;
use crate::state::SharedState;
use axum::{
    Json, Router,
    routing::{get, post},
};
use chat::ask_handler;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use voice::voice_handler;

pub const SERVICE_NAME: &str = "Girahni AI Server";

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/ask", post(ask_handler))
        .route("/voice", post(voice_handler))
        .route("/health", get(health_handler))
        .route("/", get(|| async { "Girahni AI Server is running" }))
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
