use crate::errors::WebUiError;
use crate::http::{ProtocolError, TransportError};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Instance fetch failed: {0}")]
    Transport(#[from] TransportError),

    #[error("Instance fetch got an unusable response: {0}")]
    Protocol(#[from] ProtocolError),
}

impl WebUiError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::Transport(e) => e.error_code(),
            FetchError::Protocol(e) => e.error_code(),
        }
    }
}
