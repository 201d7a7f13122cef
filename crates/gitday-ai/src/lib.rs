// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! gitday-ai: natural-language commit summaries for gitday
//!
//! This library crate wraps three interchangeable text-generation backends
//! behind the [`SummaryProvider`] trait and builds the prompt they receive
//! from collected commits.
//!
//! ## Providers
//!
//! | name     | backend                              | needs key |
//! |----------|--------------------------------------|-----------|
//! | `claude` | Anthropic Messages API               | yes       |
//! | `openai` | OpenAI chat completions              | yes       |
//! | `ollama` | local Ollama, OpenAI-compatible API  | no        |
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use gitday_ai::{ProviderSettings, build_prompt, new_provider};
//!
//! # async fn run() -> Result<(), gitday_ai::AiError> {
//! let settings = ProviderSettings {
//!     provider: "ollama".to_string(),
//!     ..Default::default()
//! };
//! let provider = new_provider(&settings)?;
//! let prompt = build_prompt(&[], "2026-02-26");
//! let text = provider.summarize(&prompt, Duration::from_secs(30)).await?;
//! println!("{}: {text}", provider.name());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod claude;
pub mod error;
pub mod ollama;
pub mod openai;
pub mod prompt;
pub mod provider;

pub use claude::ClaudeProvider;
pub use error::AiError;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;
pub use prompt::build_prompt;
pub use provider::{ProviderSettings, SUPPORTED_PROVIDERS, SummaryProvider, new_provider};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::AiError;
    pub use crate::prompt::build_prompt;
    pub use crate::provider::{ProviderSettings, SummaryProvider, new_provider};
}
