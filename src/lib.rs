pub mod application;
pub mod connector;
pub mod domain;

pub use application::{AskPersonaUseCase, CompletionClient};

pub use connector::{
    credentials, HttpCompletionClient, MockCompletionClient, DEFAULT_BASE_URL,
    NO_CONTENT_PLACEHOLDER,
};

pub use domain::{
    ChatMessage, ChatRole, ComposedPrompt, CompletionRequest, DomainError, Persona,
    DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEVELOPER_RULES, MAX_TEMPERATURE, MIN_TEMPERATURE,
};
