// Connector operation - validate, build, send, wrap

use super::{ConnectorConfig, ConnectorError, ResultEnvelope, Transport};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs the lakehouse call over whichever transport it was given
#[derive(Clone)]
pub struct Connector {
    transport: Arc<dyn Transport>,
}

impl Connector {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Perform one call. Required fields are checked before anything is sent.
    pub async fn execute(&self, config: &ConnectorConfig) -> Result<ResultEnvelope, ConnectorError> {
        config.validate()?;

        let request = config.request();
        info!(
            host = %config.host,
            port = config.port,
            transport = self.transport.name(),
            has_system_prompt = !config.system_prompt.is_empty(),
            "starting lakehouse request"
        );

        let start = Instant::now();
        match self.transport.send(&request).await {
            Ok(data) => {
                info!(
                    url = %request.url,
                    latency_ms = start.elapsed().as_millis() as u64,
                    status = "success",
                    "lakehouse request completed"
                );
                Ok(ResultEnvelope::success(config.echo(), data))
            }
            Err(e) => {
                warn!(
                    url = %request.url,
                    latency_ms = start.elapsed().as_millis() as u64,
                    kind = e.kind().as_str(),
                    error = %e,
                    "lakehouse request failed"
                );
                if let ConnectorError::Remote { body: Some(body), .. } = &e {
                    debug!(body = %body, "remote error body");
                }
                Err(e)
            }
        }
    }
}
