use std::rc::Rc;

use tracing::{debug, info};

use crate::http::{ApiEnvelope, HttpRequest, ProtocolError, Transport, get_envelope};
use crate::instances::errors::FetchError;
use crate::instances::operations::sort_by_numeric_id;
use crate::instances::types::{InstanceSnapshot, InstancesPayload};

/// Fetches, validates and sorts the remote instance list.
pub struct InstanceDataSource<T> {
    transport: Rc<T>,
    endpoint: String,
}

impl<T: Transport> InstanceDataSource<T> {
    pub fn new(transport: Rc<T>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one GET and return the sorted snapshot.
    ///
    /// Any error means the response must be discarded; nothing is written
    /// anywhere by this call.
    pub async fn fetch(&self) -> Result<InstanceSnapshot, FetchError> {
        debug!(event = "core.instances.fetch_started", endpoint = %self.endpoint);

        let request = HttpRequest::get(&self.endpoint);
        let envelope: ApiEnvelope<InstancesPayload> =
            get_envelope::<_, _, FetchError>(self.transport.as_ref(), &request).await?;

        if !envelope.is_success() {
            return Err(ProtocolError::NonSuccessStatus {
                status: envelope.header.status,
                message: envelope.header.message,
            }
            .into());
        }

        let payload = envelope
            .response
            .ok_or(ProtocolError::MissingField { field: "response" })?;
        let count = payload
            .count
            .ok_or(ProtocolError::MissingField { field: "count" })?;
        let mut instances = payload
            .instances
            .ok_or(ProtocolError::MissingField { field: "instances" })?;

        sort_by_numeric_id(&mut instances);

        info!(
            event = "core.instances.fetch_completed",
            count = count,
            received = instances.len()
        );

        Ok(InstanceSnapshot { count, instances })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::TransportError;
    use crate::testing::{ScriptedTransport, instances_body};
    use serde_json::json;

    const ENDPOINT: &str = "http://localhost/ec2/instances/";

    fn source(transport: &Rc<ScriptedTransport>) -> InstanceDataSource<ScriptedTransport> {
        InstanceDataSource::new(transport.clone(), ENDPOINT)
    }

    #[tokio::test]
    async fn test_fetch_sorts_numerically() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.push_json(200, instances_body(3, &["5", "3", "10"]));

        let snapshot = source(&transport).fetch().await.unwrap();

        let ids: Vec<&str> = snapshot
            .instances
            .iter()
            .map(|i| i.instance_id.as_str())
            .collect();
        assert_eq!(ids, vec!["3", "5", "10"]);
        assert_eq!(snapshot.count, 3);
        assert_eq!(snapshot.count_label(), "3 instances");

        let calls = transport.calls();
        assert_eq!(calls[0].url, ENDPOINT);
        assert!(!calls[0].with_credentials);
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.push_json(
            200,
            json!({"header": {"status": "failure", "message": "unauthorized"}, "response": null}),
        );

        let err = source(&transport).fetch().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Protocol(ProtocolError::NonSuccessStatus { ref status, .. }) if status == "failure"
        ));
    }

    #[tokio::test]
    async fn test_fetch_missing_instances() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.push_json(
            200,
            json!({"header": {"status": "success"}, "response": {"count": 2}}),
        );

        let err = source(&transport).fetch().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Protocol(ProtocolError::MissingField { field: "instances" })
        ));
    }

    #[tokio::test]
    async fn test_fetch_malformed_instance_record() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.push_json(
            200,
            json!({"header": {"status": "success"}, "response": {"count": 1, "instances": [{"id": 1}]}}),
        );

        let err = source(&transport).fetch().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Protocol(ProtocolError::MalformedPayload { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        let transport = Rc::new(ScriptedTransport::new());
        transport.push_error(TransportError::RequestFailed {
            url: ENDPOINT.to_string(),
            message: "timed out".to_string(),
        });

        let err = source(&transport).fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
