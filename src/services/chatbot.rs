use crate::config::ModelConfig;
use crate::error::RelayError;
use crate::services::openai::{ChatMessage, Role, VendorApi};

/// System prompt sent ahead of every user message.
pub const PERSONA: &str = "
You are Girahni, a friendly, polite Indian home AI assistant.
You speak in Roman Hindi + simple English.
You respond short, natural, and human-like.
You control lights, fan, AC, music, and home automation tasks.
";

// The user text is forwarded as-is, even when empty.
pub fn build_messages(user_text: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage { role: Role::System, content: PERSONA.to_string() },
        ChatMessage { role: Role::User, content: user_text.to_string() },
    ]
}

pub async fn ask(
    api: &dyn VendorApi,
    models: &ModelConfig,
    user_text: &str,
) -> Result<String, RelayError> {
    let messages = build_messages(user_text);
    api.create_chat_completion(&models.chat_model, &messages).await
}
