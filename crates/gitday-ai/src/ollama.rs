//! Local Ollama provider
//!
//! Uses Ollama's OpenAI-compatible chat endpoint, so no API key is involved.
//! Connection problems only show up when [`SummaryProvider::summarize`] runs.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::AiError;
use crate::openai::{CHAT_COMPLETIONS_PATH, ChatCompletion};
use crate::provider::{ChatMessage, SummaryProvider, non_empty, post_json};

/// Address of a default local Ollama install
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Model used when none is configured
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

const NAME: &str = "Ollama";

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    stream: bool,
}

/// Summaries from a locally running Ollama server
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    /// Create a provider; empty arguments select the defaults
    #[must_use]
    pub fn new(base_url: &str, model: &str) -> Self {
        let base_url = match base_url.trim() {
            "" => DEFAULT_OLLAMA_URL,
            url => url,
        };
        let model = if model.is_empty() {
            DEFAULT_OLLAMA_MODEL
        } else {
            model
        };
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    /// Server the provider talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Model name sent with each request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl SummaryProvider for OllamaProvider {
    async fn summarize(&self, prompt: &str, timeout: Duration) -> Result<String, AiError> {
        let body = OllamaRequest {
            model: &self.model,
            messages: [ChatMessage::user(prompt)],
            stream: false,
        };
        let request = self
            .client
            .post(format!("{}{CHAT_COMPLETIONS_PATH}", self.base_url));

        let response: ChatCompletion = post_json(request, NAME, &body, timeout).await?;
        non_empty(NAME, response.into_text())
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
