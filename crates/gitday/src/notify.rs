//! Webhook delivery

use std::time::Duration;

use serde_json::json;
use tracing::debug;

/// Time allowed for a webhook round trip
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Webhook delivery errors
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The request could not be sent or timed out
    #[error("Webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status
    #[error("Webhook returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },
}

/// POST `{"text": text}` to an incoming webhook, once
///
/// # Errors
///
/// Returns `NotifyError::Http` on transport failure or timeout and
/// `NotifyError::Status` when the server rejects the message.
pub async fn send_webhook(url: &str, text: &str, timeout: Duration) -> Result<(), NotifyError> {
    let response = reqwest::Client::new()
        .post(url)
        .timeout(timeout)
        .json(&json!({ "text": text }))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(NotifyError::Status {
            status: status.as_u16(),
            body,
        });
    }
    debug!(status = status.as_u16(), "Webhook accepted message");
    Ok(())
}
