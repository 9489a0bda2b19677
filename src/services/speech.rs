use axum::body::Bytes;

use crate::config::ModelConfig;
use crate::error::RelayError;
use crate::services::openai::VendorApi;

pub async fn synthesize(
    api: &dyn VendorApi,
    models: &ModelConfig,
    text: &str,
) -> Result<Bytes, RelayError> {
    api.create_speech(&models.speech_model, &models.voice, text).await
}
