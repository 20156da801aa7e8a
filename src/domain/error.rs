use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing input: user prompt is empty")]
    MissingInput,

    #[error("Missing credential: no API token found (set HF_TOKEN or pass --token)")]
    MissingCredential,

    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Remote error: {0}")]
    RemoteError(String),
}

impl DomainError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportFailure(msg.into())
    }

    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteError(msg.into())
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput)
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }

    pub fn is_remote_error(&self) -> bool {
        matches!(self, Self::RemoteError(_))
    }
}
