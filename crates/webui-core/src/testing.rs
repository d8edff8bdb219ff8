//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;
use tokio::sync::oneshot;

use crate::http::{HttpRequest, HttpResponse, Transport, TransportError};

type Reply = Result<HttpResponse, TransportError>;

enum Scripted {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

/// Transport answering from a queue of scripted replies, in call order.
///
/// Gated replies stay pending until the test sends on the returned channel,
/// which lets tests control the order in which overlapping requests resolve.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_raw(&self, status: u16, body: &str) {
        self.replies
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(HttpResponse::new(status, body))));
    }

    pub(crate) fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, &body.to_string());
    }

    pub(crate) fn push_error(&self, error: TransportError) {
        self.replies
            .borrow_mut()
            .push_back(Scripted::Ready(Err(error)));
    }

    pub(crate) fn push_gated(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub(crate) fn calls(&self) -> Vec<HttpRequest> {
        self.calls.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn get(&self, request: &HttpRequest) -> Reply {
        self.calls.borrow_mut().push(request.clone());
        let next = self.replies.borrow_mut().pop_front();

        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Gated(rx)) => rx.await.unwrap_or_else(|_| {
                Err(TransportError::RequestFailed {
                    url: request.url.clone(),
                    message: "gate dropped".to_string(),
                })
            }),
            None => Err(TransportError::RequestFailed {
                url: request.url.clone(),
                message: "no scripted reply".to_string(),
            }),
        }
    }
}

pub(crate) fn instances_body(count: u64, ids: &[&str]) -> Value {
    let instances: Vec<Value> = ids
        .iter()
        .map(|id| serde_json::json!({ "InstanceId": id }))
        .collect();
    serde_json::json!({
        "header": { "status": "success", "message": "" },
        "response": { "count": count, "instances": instances }
    })
}
