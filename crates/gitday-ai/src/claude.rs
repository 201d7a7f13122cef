//! Anthropic Messages API provider

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AiError;
use crate::provider::{ChatMessage, MAX_TOKENS, SummaryProvider, non_empty, post_json};

/// Anthropic API base URL
const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Messages endpoint path
const MESSAGES_PATH: &str = "/v1/messages";

/// Anthropic API version header
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Model used when none is configured
pub const DEFAULT_CLAUDE_MODEL: &str = "claude-haiku-4-5-20251001";

const NAME: &str = "Claude";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Summaries from Anthropic's Claude models
#[derive(Debug, Clone)]
pub struct ClaudeProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ClaudeProvider {
    /// Create a provider; an empty `model` selects [`DEFAULT_CLAUDE_MODEL`]
    #[must_use]
    pub fn new(api_key: &str, model: &str) -> Self {
        let model = if model.is_empty() {
            DEFAULT_CLAUDE_MODEL
        } else {
            model
        };
        Self {
            client: reqwest::Client::new(),
            base_url: ANTHROPIC_BASE_URL.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Send requests to another host (proxy or test server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Model name sent with each request
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}{MESSAGES_PATH}", self.base_url)
    }
}

#[async_trait]
impl SummaryProvider for ClaudeProvider {
    async fn summarize(&self, prompt: &str, timeout: Duration) -> Result<String, AiError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: [ChatMessage::user(prompt)],
        };
        let request = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION);

        let response: MessagesResponse = post_json(request, NAME, &body, timeout).await?;
        let text = response.content.into_iter().next().and_then(|b| b.text);
        non_empty(NAME, text)
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
