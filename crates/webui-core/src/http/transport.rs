use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::errors::{ProtocolError, TransportError};
use crate::http::types::{ApiEnvelope, HttpRequest, HttpResponse};

/// Issues HTTP requests on behalf of the view.
///
/// Implementations run on the single-threaded page loop, so the returned
/// futures need not be `Send`. There is no timeout or retry at this seam; a
/// request that never completes simply never resumes its caller.
pub trait Transport {
    fn get(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>>;
}

/// Send `request` and parse the body as an [`ApiEnvelope`].
///
/// Non-2xx responses are transport errors. The envelope's `header.status` is
/// NOT checked here; callers decide what a non-success status means.
pub async fn get_envelope<T, Tr, E>(transport: &Tr, request: &HttpRequest) -> Result<ApiEnvelope<T>, E>
where
    T: DeserializeOwned,
    Tr: Transport,
    E: From<TransportError> + From<ProtocolError>,
{
    let response = transport.get(request).await?;

    if !response.is_success() {
        return Err(TransportError::HttpStatus {
            url: request.url.clone(),
            status: response.status,
        }
        .into());
    }

    let envelope = serde_json::from_str::<ApiEnvelope<T>>(&response.body).map_err(|e| {
        ProtocolError::MalformedPayload {
            message: e.to_string(),
        }
    })?;

    debug!(
        event = "core.http.envelope_received",
        url = %request.url,
        status = %envelope.header.status
    );

    Ok(envelope)
}
