// Transport trait - the remote-call strategy behind the connector

use super::{ConnectorError, RequestEnvelope};
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Sends one request envelope and returns the decoded JSON reply
#[async_trait]
pub trait Transport: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &'static str;

    async fn send(&self, request: &RequestEnvelope) -> Result<Value, ConnectorError>;
}

/// Offline strategy: never touches the network and answers every request with
/// the same canned object. Requests are recorded in call order.
#[derive(Clone)]
pub struct StubTransport {
    response: Value,
    calls: Arc<Mutex<Vec<RequestEnvelope>>>,
}

impl StubTransport {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Placeholder reply used when no response is configured
    pub fn placeholder() -> Self {
        Self::new(json!({
            "message": "stub response, no request was sent",
            "items": []
        }))
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<RequestEnvelope> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[async_trait]
impl Transport for StubTransport {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn send(&self, request: &RequestEnvelope) -> Result<Value, ConnectorError> {
        debug!(url = %request.url, "stub transport answering without network call");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        Ok(self.response.clone())
    }
}
