use reqwest::Client;
use reqwest::header::{ACCEPT, COOKIE};
use tracing::debug;

use webui_core::{HttpRequest, HttpResponse, Transport, TransportError, WebUiConfig};

/// [`Transport`] backed by a reqwest client.
///
/// Credentialed requests carry the session cookie. Bodies are read in chunks
/// and rejected once they pass the configured size limit.
pub struct ReqwestTransport {
    client: Client,
    cookie_header: Option<String>,
    max_response_bytes: u64,
}

impl ReqwestTransport {
    pub fn new(config: &WebUiConfig, cookie: Option<&str>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .gzip(config.gzip())
            .user_agent(concat!("webui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            cookie_header: cookie.map(|raw| format!("{}={}", config.cookie_name(), raw)),
            max_response_bytes: config.max_response_bytes(),
        })
    }

    fn too_large(&self, url: &str) -> TransportError {
        TransportError::BodyTooLarge {
            url: url.to_string(),
            limit: self.max_response_bytes,
        }
    }
}

/// Append `chunk` unless the body would grow past `limit` bytes.
fn append_within_limit(body: &mut Vec<u8>, chunk: &[u8], limit: u64) -> bool {
    if (body.len() + chunk.len()) as u64 > limit {
        return false;
    }
    body.extend_from_slice(chunk);
    true
}

impl Transport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let mut builder = self.client.get(url).header(ACCEPT, "application/json");

        if request.with_credentials
            && let Some(cookie) = &self.cookie_header
        {
            builder = builder.header(COOKIE, cookie);
        }

        let mut response = builder
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();

        if response
            .content_length()
            .is_some_and(|len| len > self.max_response_bytes)
        {
            return Err(self.too_large(url));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| TransportError::BodyRead {
                url: url.to_string(),
                message: e.to_string(),
            })?
        {
            if !append_within_limit(&mut body, &chunk, self.max_response_bytes) {
                return Err(self.too_large(url));
            }
        }

        let body = String::from_utf8(body).map_err(|e| TransportError::BodyRead {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!(
            event = "cli.http.response_received",
            url = url,
            status = status,
            bytes = body.len()
        );

        Ok(HttpResponse::new(status, body))
    }
}
