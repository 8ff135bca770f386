// HTTP transport - reqwest-backed communication with the lakehouse service

use super::{ConnectorError, ConnectorInitError, RequestEnvelope, Transport};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

const BODY_PREVIEW_BYTES: usize = 200;

/// Live strategy: one POST per request, no retry
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport. `timeout_secs = None` keeps the client default.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, ConnectorInitError> {
        info!(timeout_secs = ?timeout_secs, "initializing http transport");

        let mut builder = Client::builder();
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ConnectorInitError::ClientError)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn send(&self, request: &RequestEnvelope) -> Result<Value, ConnectorError> {
        debug!(url = %request.url, "sending HTTP request");

        let response = self
            .client
            .post(&request.url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request.body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "received HTTP response");

        let body = response.text().await?;
        debug!(response_preview = %preview(&body), "response body received");

        if status.is_success() {
            let data: Value = serde_json::from_str(&body)?;
            Ok(data)
        } else {
            Err(ConnectorError::Remote {
                status: status.as_u16(),
                body: serde_json::from_str(&body).ok(),
            })
        }
    }
}

/// First bytes of a body, cut on a char boundary
fn preview(body: &str) -> String {
    if body.len() <= BODY_PREVIEW_BYTES {
        return body.to_string();
    }
    let mut end = BODY_PREVIEW_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
