use async_trait::async_trait;

use crate::domain::{CompletionRequest, DomainError};

/// An interface for sending a composed chat-completion request and receiving
/// the assistant's text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details. Consumers (e.g. [`crate::application::AskPersonaUseCase`])
/// remain decoupled from any particular provider or HTTP client library.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `request` authorized by `credential` and return the response
    /// text. Single attempt — no retry, no streaming consumption; the
    /// response is awaited and processed as one unit.
    ///
    /// A blank credential must be reported as
    /// [`DomainError::MissingCredential`] before any network call.
    async fn send(
        &self,
        request: &CompletionRequest,
        credential: &str,
    ) -> Result<String, DomainError>;
}
