use std::sync::Arc;

use anyhow::Context;
use girahni_backend::{
    config::Config, routes, services::openai::OpenAiClient, state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    if config.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; vendor calls will fail authentication");
    }

    let client = OpenAiClient::with_base_url(config.api_key.clone(), config.base_url.clone());
    let state = Arc::new(AppState::new(Arc::new(client), config.models.clone()));

    let app = routes::create_router().with_state(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Girahni AI Server running on port {}", config.port);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
