//! OpenAI chat completions provider

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AiError;
use crate::provider::{ChatMessage, MAX_TOKENS, SummaryProvider, non_empty, post_json};

/// OpenAI API base URL
const OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Chat completions path, shared with OpenAI-compatible servers
pub(crate) const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Model used when none is configured
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

const NAME: &str = "OpenAI";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [ChatMessage<'a>; 1],
}

/// Response of `/v1/chat/completions`
#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletion {
    /// Text of the first choice, if any
    pub(crate) fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}

/// Summaries from OpenAI chat models
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a provider; an empty `model` selects [`DEFAULT_OPENAI_MODEL`]
    #[must_use]
    pub fn new(api_key: &str, model: &str) -> Self {
        let model = if model.is_empty() {
            DEFAULT_OPENAI_MODEL
        } else {
            model
        };
        Self {
            client: reqwest::Client::new(),
            base_url: OPENAI_BASE_URL.to_string(),
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
}

#[async_trait]
impl SummaryProvider for OpenAiProvider {
    async fn summarize(&self, prompt: &str, timeout: Duration) -> Result<String, AiError> {
        let body = CompletionRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: [ChatMessage::user(prompt)],
        };
        let request = self
            .client
            .post(format!("{}{CHAT_COMPLETIONS_PATH}", self.base_url))
            .bearer_auth(&self.api_key);

        let response: ChatCompletion = post_json(request, NAME, &body, timeout).await?;
        non_empty(NAME, response.into_text())
    }

    fn name(&self) -> &'static str {
        NAME
    }
}
