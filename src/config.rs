// src/config.rs
use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_PORT: u16 = 3000;

/// Fixed model selection passed through to the vendor on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub chat_model: String,
    pub speech_model: String,
    pub voice: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            chat_model: "gpt-4o-mini".to_string(),
            speech_model: "gpt-4o-mini-tts".to_string(),
            voice: "verse".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Not validated here; an empty key surfaces as the vendor's auth error.
    pub api_key: String,
    pub base_url: String,
    pub models: ModelConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            api_key: lookup("OPENAI_API_KEY")
                .map(|key| key.trim().to_string())
                .unwrap_or_default(),
            base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            models: ModelConfig::default(),
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_env_is_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_empty());
        assert_eq!(config.models, ModelConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("OPENAI_API_KEY", "sk-test\n"),
            ("OPENAI_BASE_URL", "http://localhost:9999/v1"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "http://localhost:9999/v1");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "abc")])).unwrap_err();
        assert!(err.to_string().contains("PORT must be a number"));
    }
}
