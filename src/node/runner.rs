// Node runner - drives the connector over a batch of items

use crate::connector::Connector;
use crate::node::error::NodeOperationError;
use crate::node::parameters::{ParameterSource, resolve_config};
use crate::node::types::{ErrorRecord, ExecutionMode, NodeItem, NodeOutput};
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

/// Runs the connector once per item, sequentially
pub struct NodeRunner {
    connector: Connector,
    mode: ExecutionMode,
}

impl NodeRunner {
    pub fn new(connector: Connector, mode: ExecutionMode) -> Self {
        Self { connector, mode }
    }

    /// Execute the batch. An empty batch still runs once.
    ///
    /// In fail-fast mode the first failure aborts the batch and is returned
    /// with its item index. In continue mode it becomes an [`ErrorRecord`] at
    /// that position and the loop moves on.
    pub async fn run(
        &self,
        items: &[NodeItem],
        params: &dyn ParameterSource,
    ) -> Result<Vec<NodeOutput>, NodeOperationError> {
        let loop_count = items.len().max(1);
        info!(
            items = items.len(),
            loop_count = loop_count,
            mode = ?self.mode,
            transport = self.connector.transport_name(),
            "running connector node"
        );

        let mut outputs = Vec::with_capacity(loop_count);

        for item_index in 0..loop_count {
            debug!(item_index = item_index, "processing item");

            let result = match resolve_config(params, item_index) {
                Ok(config) => self.connector.execute(&config).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(envelope) => outputs.push(NodeOutput::Success { json: envelope }),
                Err(e) => match self.mode {
                    ExecutionMode::ContinueOnFail => {
                        warn!(
                            item_index = item_index,
                            kind = e.kind().as_str(),
                            error = %e,
                            "item failed, continuing"
                        );
                        let json = items
                            .get(item_index)
                            .map(|item| Value::Object(item.json.clone()))
                            .unwrap_or_else(|| Value::Object(Map::new()));
                        outputs.push(NodeOutput::Failed(ErrorRecord {
                            json,
                            error: e.to_string(),
                        }));
                    }
                    ExecutionMode::FailFast => {
                        error!(
                            item_index = item_index,
                            kind = e.kind().as_str(),
                            error = %e,
                            "item failed, aborting batch"
                        );
                        return Err(NodeOperationError::new(item_index, e));
                    }
                },
            }
        }

        info!(
            outputs = outputs.len(),
            failed = outputs.iter().filter(|o| o.is_error()).count(),
            "connector node finished"
        );
        Ok(outputs)
    }
}
