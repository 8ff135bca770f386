// Node types

use crate::connector::ResultEnvelope;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One input item handed over by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeItem {
    #[serde(default)]
    pub json: Map<String, Value>,
}

impl NodeItem {
    pub fn new(json: Map<String, Value>) -> Self {
        Self { json }
    }
}

/// Per-item failure captured in continue-on-failure mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// The failing item's own data, or `{}` when the batch was empty
    pub json: Value,
    pub error: String,
}

/// One entry of the node's output list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NodeOutput {
    Success { json: ResultEnvelope },
    Failed(ErrorRecord),
}

impl NodeOutput {
    pub fn is_error(&self) -> bool {
        matches!(self, NodeOutput::Failed(_))
    }

    #[allow(dead_code)]
    pub fn envelope(&self) -> Option<&ResultEnvelope> {
        match self {
            NodeOutput::Success { json } => Some(json),
            NodeOutput::Failed(_) => None,
        }
    }

    #[allow(dead_code)]
    pub fn error_record(&self) -> Option<&ErrorRecord> {
        match self {
            NodeOutput::Success { .. } => None,
            NodeOutput::Failed(record) => Some(record),
        }
    }
}

/// Batch-wide failure policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    FailFast,
    ContinueOnFail,
}

impl ExecutionMode {
    pub fn from_flag(continue_on_fail: bool) -> Self {
        if continue_on_fail {
            ExecutionMode::ContinueOnFail
        } else {
            ExecutionMode::FailFast
        }
    }
}
