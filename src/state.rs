// src/state.rs
use std::sync::Arc;

use crate::config::ModelConfig;
use crate::services::openai::VendorApi;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub api: Arc<dyn VendorApi>,
    pub models: ModelConfig,
}

impl AppState {
    pub fn new(api: Arc<dyn VendorApi>, models: ModelConfig) -> Self {
        Self { api, models }
    }
}
