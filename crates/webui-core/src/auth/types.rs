use serde::{Deserialize, Serialize};

use crate::http::ApiEnvelope;

/// `response` body of the authentication endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    Success,
    Failure,
}

/// Outcome of one probe. Consumed immediately to update the avatar; never
/// retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticationResult {
    pub status: AuthStatus,
    pub token: Option<String>,
    pub avatar_url: Option<String>,
}

impl AuthenticationResult {
    /// Interpret an auth envelope. `avatar_scheme` is prepended to the
    /// protocol-relative image path.
    pub fn from_envelope(envelope: ApiEnvelope<AuthPayload>, avatar_scheme: &str) -> Self {
        let status = if envelope.is_success() {
            AuthStatus::Success
        } else {
            AuthStatus::Failure
        };
        let payload = envelope.response.unwrap_or_default();
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        Self {
            status,
            token: non_empty(payload.token),
            avatar_url: non_empty(payload.img).map(|img| format!("{avatar_scheme}{img}")),
        }
    }

    /// Authenticated means a success status and a token.
    pub fn is_established(&self) -> bool {
        self.status == AuthStatus::Success && self.token.is_some()
    }
}
