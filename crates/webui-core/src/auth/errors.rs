use crate::errors::WebUiError;
use crate::http::{ProtocolError, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Authentication probe failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Authentication probe got an unusable response: {0}")]
    Protocol(#[from] ProtocolError),
}

impl WebUiError for ProbeError {
    fn error_code(&self) -> &'static str {
        match self {
            ProbeError::Transport(e) => e.error_code(),
            ProbeError::Protocol(e) => e.error_code(),
        }
    }
}
