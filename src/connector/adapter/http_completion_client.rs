use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::application::CompletionClient;
use crate::domain::{CompletionRequest, DomainError};

/// Default target: the Hugging Face router's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Surfaced when a success response carries no extractable content. Not an
/// error: a blank result is never shown silently.
pub const NO_CONTENT_PLACEHOLDER: &str = "(No content returned.)";

/// Ordered content-extraction strategies over the first choice. Each is
/// total — it returns `None` rather than failing — and they are tried in
/// priority order before falling back to [`NO_CONTENT_PLACEHOLDER`].
const CONTENT_STRATEGIES: &[fn(&Value) -> Option<String>] = &[message_content, delta_content];

/// `choices[0].message.content` — the standard completion shape.
fn message_content(choice: &Value) -> Option<String> {
    non_empty(choice.get("message")?.get("content")?.as_str()?)
}

/// `choices[0].delta.content` — the streaming-chunk shape some
/// OpenAI-compatible servers return even for non-streaming calls.
fn delta_content(choice: &Value) -> Option<String> {
    non_empty(choice.get("delta")?.get("content")?.as_str()?)
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// HTTP client for OpenAI-compatible chat-completion endpoints (the Hugging
/// Face router by default).
///
/// Implements [`CompletionClient`] so higher-level components (e.g.
/// [`crate::application::AskPersonaUseCase`]) stay decoupled from transport
/// and serialization details.
///
/// Override the target via the environment to reach any compatible server:
///
/// ```text
/// HF_BASE_URL=http://localhost:1234
/// ```
///
/// One outbound POST per [`send`](CompletionClient::send); no retry, no
/// timeout beyond the transport's own defaults, no streaming consumption.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl HttpCompletionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Construct from the environment: `HF_BASE_URL` overrides the base,
    /// defaulting to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base =
            std::env::var("HF_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    /// Endpoint URL this client posts to (for logging purposes).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Extract response text from a success body via [`CONTENT_STRATEGIES`].
    fn extract_content(body: &Value) -> Option<String> {
        let choice = body.get("choices")?.get(0)?;
        CONTENT_STRATEGIES.iter().find_map(|strategy| strategy(choice))
    }

    /// Reduce an error body to its most specific message: an `error` string,
    /// then `error.message`, then a top-level `message`, then the raw body
    /// verbatim when it is not JSON at all.
    fn normalize_error_message(body: &str) -> String {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return body.to_string();
        };

        if let Some(error) = value.get("error") {
            if let Some(text) = error.as_str() {
                return text.to_string();
            }
            if let Some(text) = error.get("message").and_then(Value::as_str) {
                return text.to_string();
            }
        }

        if let Some(text) = value.get("message").and_then(Value::as_str) {
            return text.to_string();
        }

        body.to_string()
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn send(
        &self,
        request: &CompletionRequest,
        credential: &str,
    ) -> Result<String, DomainError> {
        let credential = credential.trim();
        if credential.is_empty() {
            return Err(DomainError::MissingCredential);
        }

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(credential)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let message = Self::normalize_error_message(&body);
            warn!("Completion endpoint returned {status}: {message}");
            return Err(DomainError::remote(format!("HTTP {status}: {message}")));
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| DomainError::transport(format!("malformed response body: {e}")))?;

        // A success status can still carry an explicit error envelope.
        if value.get("error").is_some()
            || (value.get("choices").is_none() && value.get("message").is_some())
        {
            return Err(DomainError::remote(Self::normalize_error_message(&body)));
        }

        match Self::extract_content(&value) {
            Some(text) => Ok(text),
            None => {
                debug!("Success response carried no content fields");
                Ok(NO_CONTENT_PLACEHOLDER.to_string())
            }
        }
    }
}
