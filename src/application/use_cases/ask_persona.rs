use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::application::CompletionClient;
use crate::domain::{ComposedPrompt, CompletionRequest, DomainError};

/// Compose a persona prompt from user text and send it through a
/// [`CompletionClient`], surfacing the response text or a normalized error.
///
/// At most one request/response cycle is in flight per use-case instance:
/// `execute` holds `in_flight` for the whole cycle, and the lock guard is
/// released on every exit path when it drops. Callers that must prevent
/// re-triggering (a UI disabling its send control) get that exclusion for
/// free by sharing the instance.
pub struct AskPersonaUseCase {
    client: Arc<dyn CompletionClient>,
    in_flight: Mutex<()>,
}

impl AskPersonaUseCase {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            in_flight: Mutex::new(()),
        }
    }

    /// Validate, compose, and send.
    ///
    /// Empty-after-trim `user_text` is rejected before composition or any
    /// network activity. Unknown persona labels fall back to the default
    /// persona inside composition.
    pub async fn execute(
        &self,
        persona_label: &str,
        user_text: &str,
        model: &str,
        temperature: f32,
        credential: &str,
    ) -> Result<String, DomainError> {
        if user_text.trim().is_empty() {
            return Err(DomainError::MissingInput);
        }

        // One request/response cycle at a time; released on all exit paths.
        let _in_flight = self.in_flight.lock().await;

        let prompt = ComposedPrompt::compose(persona_label, user_text);
        let request = CompletionRequest::new(model, &prompt, temperature);

        info!(
            "Sending completion request: persona={}, model={}, temperature={:.1}",
            persona_label,
            request.model(),
            request.temperature()
        );

        let text = self.client.send(&request, credential).await?;

        debug!("Received {} characters of response text", text.len());

        Ok(text)
    }
}
