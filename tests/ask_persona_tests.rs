//! Integration tests for the ask-persona use case through a recording
//! completion-client double.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use promptproxy::{
    AskPersonaUseCase, CompletionClient, CompletionRequest, DomainError, Persona, ChatRole,
    DEVELOPER_RULES,
};

/// Records every request it receives and answers with a fixed reply.
struct RecordingClient {
    sent: Mutex<Vec<CompletionRequest>>,
    reply: String,
}

impl RecordingClient {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            reply: reply.to_string(),
        })
    }

    async fn sent(&self) -> Vec<CompletionRequest> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl CompletionClient for RecordingClient {
    async fn send(
        &self,
        request: &CompletionRequest,
        _credential: &str,
    ) -> Result<String, DomainError> {
        self.sent.lock().await.push(request.clone());
        Ok(self.reply.clone())
    }
}

#[tokio::test]
async fn empty_user_text_is_rejected_before_any_send() {
    let client = RecordingClient::new("unused");
    let use_case = AskPersonaUseCase::new(client.clone());

    let err = use_case
        .execute("Musician", "   \n\t  ", "m", 0.7, "token")
        .await
        .unwrap_err();

    assert!(err.is_missing_input());
    assert!(client.sent().await.is_empty(), "no request should be sent");
}

#[tokio::test]
async fn response_text_passes_through_unchanged() {
    let client = RecordingClient::new("Here is a practice plan.");
    let use_case = AskPersonaUseCase::new(client);

    let text = use_case
        .execute("Musician", "How do I practice scales?", "m", 0.7, "token")
        .await
        .unwrap();

    assert_eq!(text, "Here is a practice plan.");
}

#[tokio::test]
async fn wire_request_carries_rules_suffixed_system_message() {
    let client = RecordingClient::new("ok");
    let use_case = AskPersonaUseCase::new(client.clone());

    use_case
        .execute("Photographer", "  golden hour tips  ", "m", 0.7, "token")
        .await
        .unwrap();

    let sent = client.sent().await;
    assert_eq!(sent.len(), 1);

    let messages = sent[0].messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role(), ChatRole::System);
    assert!(messages[0].content().ends_with(DEVELOPER_RULES));
    assert!(messages[0]
        .content()
        .starts_with(Persona::resolve("Photographer").system_text()));
    assert_eq!(messages[1].content(), "golden hour tips");
}

#[tokio::test]
async fn unknown_persona_falls_back_to_default_on_the_wire() {
    let client = RecordingClient::new("ok");
    let use_case = AskPersonaUseCase::new(client.clone());

    use_case
        .execute("Astronaut", "hello", "m", 0.7, "token")
        .await
        .unwrap();

    let sent = client.sent().await;
    assert!(sent[0].messages()[0]
        .content()
        .starts_with(Persona::default_persona().system_text()));
}

#[tokio::test]
async fn sequential_invocations_reuse_the_same_guard() {
    let client = RecordingClient::new("ok");
    let use_case = AskPersonaUseCase::new(client.clone());

    for _ in 0..3 {
        use_case
            .execute("Artist", "hello", "m", 0.7, "token")
            .await
            .unwrap();
    }

    assert_eq!(client.sent().await.len(), 3);
}

#[tokio::test]
async fn a_failed_send_does_not_poison_the_next_invocation() {
    struct FailOnce {
        failed: Mutex<bool>,
    }

    #[async_trait]
    impl CompletionClient for FailOnce {
        async fn send(
            &self,
            _request: &CompletionRequest,
            _credential: &str,
        ) -> Result<String, DomainError> {
            let mut failed = self.failed.lock().await;
            if !*failed {
                *failed = true;
                return Err(DomainError::remote("HTTP 500: internal error"));
            }
            Ok("recovered".to_string())
        }
    }

    let use_case = AskPersonaUseCase::new(Arc::new(FailOnce {
        failed: Mutex::new(false),
    }));

    let err = use_case
        .execute("Artist", "hello", "m", 0.7, "token")
        .await
        .unwrap_err();
    assert!(err.is_remote_error());

    // The guard released on the error path; a retry by the caller works.
    let text = use_case
        .execute("Artist", "hello", "m", 0.7, "token")
        .await
        .unwrap();
    assert_eq!(text, "recovered");
}
