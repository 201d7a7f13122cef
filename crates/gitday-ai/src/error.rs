// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! Error types for gitday-ai

use thiserror::Error;

/// Errors from building or invoking a summary provider
#[derive(Debug, Error)]
pub enum AiError {
    /// A cloud provider was selected without an API key
    #[error("{provider} API key is required (set GITDAY_API_KEY or ai.api_key)")]
    MissingApiKey {
        /// Display name of the provider
        provider: &'static str,
    },

    /// The configured provider name is not one of the supported backends
    #[error("unsupported AI provider: {name} (claude/openai/ollama)")]
    UnsupportedProvider {
        /// The name as configured
        name: String,
    },

    /// The request could not be sent or timed out
    #[error("{provider} request failed: {source}")]
    Http {
        /// Display name of the provider
        provider: &'static str,
        /// Underlying transport error
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("{provider} API error ({status}): {body}")]
    Api {
        /// Display name of the provider
        provider: &'static str,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body was not the expected JSON shape
    #[error("{provider} returned an unreadable response: {source}")]
    Decode {
        /// Display name of the provider
        provider: &'static str,
        /// JSON error
        source: serde_json::Error,
    },

    /// The response carried no summary text
    #[error("{provider} returned an empty response")]
    EmptyResponse {
        /// Display name of the provider
        provider: &'static str,
    },
}

impl AiError {
    /// Whether the failure was a request deadline expiring
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http { source, .. } if source.is_timeout())
    }
}
