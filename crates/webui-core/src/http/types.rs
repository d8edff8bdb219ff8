use serde::{Deserialize, Serialize};

/// Status value the backend services put in `header.status` on success.
pub const STATUS_SUCCESS: &str = "success";

/// A GET request issued through a [`crate::http::Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    /// Attach the page's credentials (the session cookie) to the request.
    pub with_credentials: bool,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            with_credentials: false,
        }
    }

    pub fn with_credentials(mut self) -> Self {
        self.with_credentials = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHeader {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Response envelope shared by the backend services:
/// `{"header": {"status": ..., "message": ...}, "response": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub header: ApiHeader,
    #[serde(default = "Option::default")]
    pub response: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.header.status == STATUS_SUCCESS
    }
}
