use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Bytes;
use girahni_backend::config::ModelConfig;
use girahni_backend::error::RelayError;
use girahni_backend::routes::create_router;
use girahni_backend::services::openai::{ChatMessage, VendorApi};
use girahni_backend::state::AppState;

#[derive(Debug, Clone)]
pub enum Call {
    Chat { model: String, messages: Vec<ChatMessage> },
    Speech { model: String, voice: String, input: String },
}

/// Echoes its input back, or fails every call with `fail_with`.
#[derive(Default)]
pub struct FakeVendor {
    pub fail_with: Option<String>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeVendor {
    pub fn failing(message: &str) -> Self {
        Self { fail_with: Some(message.to_string()), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl VendorApi for FakeVendor {
    async fn create_chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, RelayError> {
        self.calls.lock().unwrap().push(Call::Chat {
            model: model.to_string(),
            messages: messages.to_vec(),
        });
        tokio::task::yield_now().await;
        match &self.fail_with {
            Some(msg) => Err(RelayError::Vendor(msg.clone())),
            None => Ok(format!("echo:{}", messages.last().map(|m| m.content.as_str()).unwrap_or(""))),
        }
    }

    async fn create_speech(
        &self,
        model: &str,
        voice: &str,
        input: &str,
    ) -> Result<Bytes, RelayError> {
        self.calls.lock().unwrap().push(Call::Speech {
            model: model.to_string(),
            voice: voice.to_string(),
            input: input.to_string(),
        });
        tokio::task::yield_now().await;
        match &self.fail_with {
            Some(msg) => Err(RelayError::Vendor(msg.clone())),
            None => Ok(Bytes::from(format!("ID3{input}"))),
        }
    }
}

pub fn app_with(vendor: Arc<FakeVendor>) -> Router {
    let state = Arc::new(AppState::new(vendor, ModelConfig::default()));
    create_router().with_state(state)
}
