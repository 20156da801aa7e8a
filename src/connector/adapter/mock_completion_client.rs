use async_trait::async_trait;
use tracing::debug;

use crate::application::CompletionClient;
use crate::domain::{ChatRole, CompletionRequest, DomainError};

/// An offline [`CompletionClient`] that answers deterministically without
/// touching the network. Selected with the CLI `--mock` flag; also useful
/// as a test double.
pub struct MockCompletionClient;

impl MockCompletionClient {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn send(
        &self,
        request: &CompletionRequest,
        _credential: &str,
    ) -> Result<String, DomainError> {
        let user_text = request
            .messages()
            .iter()
            .find(|m| m.role() == ChatRole::User)
            .map(|m| m.content())
            .unwrap_or_default();

        debug!("Mock completion for model {}", request.model());

        Ok(format!(
            "[mock] model={} temperature={:.1} — you asked: {user_text}",
            request.model(),
            request.temperature()
        ))
    }
}
