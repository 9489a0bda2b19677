//! Chat-completion and text-to-speech calls against an OpenAI-compatible API.

use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RelayError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The two vendor capabilities the relay depends on.
#[async_trait]
pub trait VendorApi: Send + Sync {
    /// Returns the text of the first completion choice.
    async fn create_chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, RelayError>;

    /// Returns the synthesized audio, fully buffered.
    async fn create_speech(
        &self,
        model: &str,
        voice: &str,
        input: &str,
    ) -> Result<Bytes, RelayError>;
}

#[derive(Clone, Debug)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            Ok(val) => {
                headers.insert(AUTHORIZATION, val);
            }
            Err(_) => warn!("API key is not a valid header value; sending request without Authorization"),
        }
        headers
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<reqwest::Response, RelayError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let resp = self
            .http
            .post(&url)
            .headers(self.headers())
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(RelayError::from_status(status.as_u16(), &body_text));
        }
        Ok(resp)
    }
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Serialize)]
struct SpeechBody<'a> {
    model: &'a str,
    voice: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl VendorApi for OpenAiClient {
    async fn create_chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, RelayError> {
        debug!(model, messages = messages.len(), "creating chat completion");

        let resp = self
            .post_json("chat/completions", &ChatCompletionBody { model, messages })
            .await?;
        let data: ChatCompletionResponse = resp.json().await?;

        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RelayError::Vendor("No choices in chat completion response".into()))?;
        Ok(choice.message.content.unwrap_or_default())
    }

    async fn create_speech(
        &self,
        model: &str,
        voice: &str,
        input: &str,
    ) -> Result<Bytes, RelayError> {
        debug!(model, voice, chars = input.chars().count(), "creating speech");

        let resp = self
            .post_json("audio/speech", &SpeechBody { model, voice, input })
            .await?;
        Ok(resp.bytes().await?)
    }
}
