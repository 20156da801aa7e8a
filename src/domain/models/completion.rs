use serde::Serialize;

use super::ComposedPrompt;

/// Model requested when the caller does not specify one.
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.1-8B-Instruct";

/// Sampling temperature used when the caller supplies a non-finite value.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Bounds of the temperature range exposed to the user.
pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    role: ChatRole,
    content: String,
}

impl ChatMessage {
    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// One outbound chat-completion request.
///
/// Serializes directly to the OpenAI-compatible wire body
/// `{model, messages, temperature}`. Always carries exactly two messages,
/// system first. Immutable once built; constructed fresh per send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

impl CompletionRequest {
    /// Build a request from a composed prompt.
    ///
    /// The temperature is clamped into the exposed range; non-finite input
    /// normalizes to [`DEFAULT_TEMPERATURE`] so the serialized value is
    /// always a finite number within bounds.
    pub fn new(model: impl Into<String>, prompt: &ComposedPrompt, temperature: f32) -> Self {
        let temperature = if temperature.is_finite() {
            temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
        } else {
            DEFAULT_TEMPERATURE
        };

        Self {
            model: model.into(),
            messages: vec![
                ChatMessage {
                    role: ChatRole::System,
                    content: prompt.system_message().to_string(),
                },
                ChatMessage {
                    role: ChatRole::User,
                    content: prompt.user_message().to_string(),
                },
            ],
            temperature,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}
