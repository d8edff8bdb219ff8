use crate::errors::WebUiError;

/// The request never produced a usable 2xx response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request to '{url}' failed: {message}")]
    RequestFailed { url: String, message: String },

    #[error("Request to '{url}' returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Response from '{url}' exceeds the {limit} byte limit")]
    BodyTooLarge { url: String, limit: u64 },

    #[error("Failed to read response from '{url}': {message}")]
    BodyRead { url: String, message: String },
}

impl WebUiError for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            TransportError::RequestFailed { .. } => "TRANSPORT_REQUEST_FAILED",
            TransportError::HttpStatus { .. } => "TRANSPORT_HTTP_STATUS",
            TransportError::BodyTooLarge { .. } => "TRANSPORT_BODY_TOO_LARGE",
            TransportError::BodyRead { .. } => "TRANSPORT_BODY_READ",
        }
    }
}

/// The response arrived but is not a usable API envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("API returned status '{status}': {message}")]
    NonSuccessStatus { status: String, message: String },

    #[error("API response is missing '{field}'")]
    MissingField { field: &'static str },

    #[error("API response is not valid JSON: {message}")]
    MalformedPayload { message: String },
}

impl WebUiError for ProtocolError {
    fn error_code(&self) -> &'static str {
        match self {
            ProtocolError::NonSuccessStatus { .. } => "PROTOCOL_NON_SUCCESS_STATUS",
            ProtocolError::MissingField { .. } => "PROTOCOL_MISSING_FIELD",
            ProtocolError::MalformedPayload { .. } => "PROTOCOL_MALFORMED_PAYLOAD",
        }
    }
}
