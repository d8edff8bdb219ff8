use std::rc::Rc;

use tracing::{debug, info};

use crate::auth::errors::ProbeError;
use crate::auth::types::{AuthPayload, AuthenticationResult};
use crate::config::defaults::DEFAULT_AVATAR_SCHEME;
use crate::cookie::SessionRecord;
use crate::http::{ApiEnvelope, HttpRequest, Transport, get_envelope};
use crate::page::Page;

/// One-shot authentication check for a decoded session.
pub struct SessionProbe<T> {
    transport: Rc<T>,
    endpoint: String,
    avatar_scheme: String,
}

impl<T: Transport> SessionProbe<T> {
    pub fn new(transport: Rc<T>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            avatar_scheme: DEFAULT_AVATAR_SCHEME.to_string(),
        }
    }

    pub fn with_avatar_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.avatar_scheme = scheme.into();
        self
    }

    /// Ask the auth endpoint whether `session` is authenticated.
    ///
    /// Returns `Ok(None)` without any network call when the session has no
    /// non-empty `id`. A non-success status is a result, not an error.
    pub async fn probe(
        &self,
        session: &SessionRecord,
    ) -> Result<Option<AuthenticationResult>, ProbeError> {
        let Some(session_id) = session.id() else {
            debug!(event = "core.auth.probe_skipped", reason = "no session id");
            return Ok(None);
        };

        info!(
            event = "core.auth.probe_started",
            session_id = session_id,
            endpoint = %self.endpoint
        );

        let request = HttpRequest::get(&self.endpoint).with_credentials();
        let envelope: ApiEnvelope<AuthPayload> =
            get_envelope::<_, _, ProbeError>(self.transport.as_ref(), &request).await?;

        let message = envelope.header.message.clone();
        let result = AuthenticationResult::from_envelope(envelope, &self.avatar_scheme);

        info!(
            event = "core.auth.probe_completed",
            session_id = session_id,
            established = result.is_established(),
            message = %message
        );

        Ok(Some(result))
    }

    /// Probe and, if authentication is established, point the page's
    /// avatar at the returned image.
    pub async fn probe_and_apply<P: Page>(
        &self,
        session: &SessionRecord,
        page: &P,
    ) -> Result<Option<AuthenticationResult>, ProbeError> {
        let result = self.probe(session).await?;

        match result.as_ref() {
            Some(auth) if auth.is_established() => match auth.avatar_url.as_deref() {
                Some(url) => {
                    page.set_avatar_src(url);
                    info!(event = "core.auth.avatar_updated", src = url);
                }
                None => debug!(event = "core.auth.avatar_unchanged", reason = "no image"),
            },
            Some(_) => debug!(
                event = "core.auth.avatar_unchanged",
                reason = "not authenticated"
            ),
            None => {}
        }

        Ok(result)
    }
}
