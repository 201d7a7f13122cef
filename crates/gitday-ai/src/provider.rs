// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! Summary provider trait and factory

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::claude::ClaudeProvider;
use crate::error::AiError;
use crate::ollama::{DEFAULT_OLLAMA_URL, OllamaProvider};
use crate::openai::OpenAiProvider;

/// Provider names accepted by [`new_provider`]
pub const SUPPORTED_PROVIDERS: [&str; 3] = ["claude", "openai", "ollama"];

/// Token cap sent to the cloud providers
pub(crate) const MAX_TOKENS: u32 = 1024;

/// A remote text-generation backend that turns a prompt into a short recap
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Generate a summary for `prompt`, giving up after `timeout`
    ///
    /// # Errors
    ///
    /// Returns an [`AiError`] on network failure, timeout, a non-success
    /// status, or a response without text.
    async fn summarize(&self, prompt: &str, timeout: Duration) -> Result<String, AiError>;

    /// Display name, e.g. "Claude"
    fn name(&self) -> &'static str;
}

/// The `[ai]` section of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// One of [`SUPPORTED_PROVIDERS`], case-insensitive
    pub provider: String,
    /// API key for the cloud providers
    pub api_key: String,
    /// Model override; empty selects the provider default
    pub model: String,
    /// Base URL of the local Ollama server
    pub ollama_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            provider: "claude".to_string(),
            api_key: String::new(),
            model: String::new(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
        }
    }
}

/// Build the provider named in `settings`
///
/// # Errors
///
/// Returns `AiError::MissingApiKey` for claude/openai without a key and
/// `AiError::UnsupportedProvider` for any other name.
pub fn new_provider(settings: &ProviderSettings) -> Result<Box<dyn SummaryProvider>, AiError> {
    let model = settings.model.trim();
    let provider: Box<dyn SummaryProvider> = match settings.provider.trim().to_lowercase().as_str()
    {
        "claude" => {
            if settings.api_key.is_empty() {
                return Err(AiError::MissingApiKey { provider: "Claude" });
            }
            Box::new(ClaudeProvider::new(&settings.api_key, model))
        }
        "openai" => {
            if settings.api_key.is_empty() {
                return Err(AiError::MissingApiKey { provider: "OpenAI" });
            }
            Box::new(OpenAiProvider::new(&settings.api_key, model))
        }
        "ollama" => Box::new(OllamaProvider::new(&settings.ollama_url, model)),
        _ => {
            return Err(AiError::UnsupportedProvider {
                name: settings.provider.clone(),
            });
        }
    };

    debug!(provider = provider.name(), "summary provider ready");
    Ok(provider)
}

/// A single chat message in the request body
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatMessage<'a> {
    pub fn user(content: &'a str) -> Self {
        Self {
            role: "user",
            content,
        }
    }
}

/// Send a JSON request and decode a JSON response
pub(crate) async fn post_json<B, R>(
    request: reqwest::RequestBuilder,
    provider: &'static str,
    body: &B,
    timeout: Duration,
) -> Result<R, AiError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = request
        .timeout(timeout)
        .json(body)
        .send()
        .await
        .map_err(|source| AiError::Http { provider, source })?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|source| AiError::Http { provider, source })?;

    if !status.is_success() {
        return Err(AiError::Api {
            provider,
            status: status.as_u16(),
            body: text,
        });
    }

    serde_json::from_str(&text).map_err(|source| AiError::Decode { provider, source })
}

/// Reject blank summaries
pub(crate) fn non_empty(provider: &'static str, text: Option<String>) -> Result<String, AiError> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(AiError::EmptyResponse { provider }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn settings(provider: &str, api_key: &str, ollama_url: &str) -> ProviderSettings {
        ProviderSettings {
            provider: provider.to_string(),
            api_key: api_key.to_string(),
            model: String::new(),
            ollama_url: ollama_url.to_string(),
        }
    }

    #[test]
    fn test_new_provider_claude() {
        let provider = new_provider(&settings("claude", "test-key", "")).expect("claude");
        assert_eq!(provider.name(), "Claude");
    }

    #[test]
    fn test_new_provider_openai() {
        let provider = new_provider(&settings("openai", "test-key", "")).expect("openai");
        assert_eq!(provider.name(), "OpenAI");
    }

    #[test]
    fn test_new_provider_ollama_without_url() {
        let provider = new_provider(&settings("ollama", "", "")).expect("ollama");
        assert_eq!(provider.name(), "Ollama");
    }

    #[test]
    fn test_new_provider_is_case_insensitive() {
        let provider = new_provider(&settings("Claude", "test-key", "")).expect("claude");
        assert_eq!(provider.name(), "Claude");
        let provider = new_provider(&settings("OLLAMA", "", "")).expect("ollama");
        assert_eq!(provider.name(), "Ollama");
    }

    #[test]
    fn test_new_provider_requires_key() {
        for name in ["claude", "openai"] {
            let err = new_provider(&settings(name, "", "")).err().expect("missing key");
            assert!(matches!(err, AiError::MissingApiKey { .. }), "{name}: {err}");
        }
    }

    #[test]
    fn test_new_provider_unknown_names_supported_set() {
        let err = new_provider(&settings("gemini", "key", ""))
            .err()
            .expect("unsupported");
        let message = err.to_string();
        assert!(message.contains("gemini"));
        for name in SUPPORTED_PROVIDERS {
            assert!(message.contains(name), "{message} should list {name}");
        }
    }

    #[test]
    fn test_default_settings() {
        let defaults = ProviderSettings::default();
        assert_eq!(defaults.provider, "claude");
        assert_eq!(defaults.ollama_url, "http://localhost:11434");
        assert!(defaults.api_key.is_empty());
    }

    #[test]
    fn test_settings_partial_deserialize() {
        let parsed: ProviderSettings =
            serde_json::from_str(r#"{"provider":"ollama"}"#).expect("deserialize");
        assert_eq!(parsed.provider, "ollama");
        assert_eq!(parsed.ollama_url, DEFAULT_OLLAMA_URL);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("Claude", Some("ok".into())).expect("text"), "ok");
        assert!(non_empty("Claude", Some("  \n".into())).is_err());
        assert!(non_empty("Claude", None).is_err());
    }
}
