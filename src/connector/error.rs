// Error types for Connector module

use thiserror::Error;

/// Stable label for each failure class, used in logs and by callers that
/// need to branch on the kind without matching the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Remote,
    Decode,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Network => "network",
            ErrorKind::Remote => "remote",
            ErrorKind::Decode => "decode",
        }
    }
}

/// Runtime errors from a single connector call
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx reply. `body` holds the decoded JSON when the service sent any.
    #[error("Remote error: HTTP {status}")]
    Remote {
        status: u16,
        body: Option<serde_json::Value>,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ConnectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConnectorError::Validation(_) => ErrorKind::Validation,
            ConnectorError::Network(_) => ErrorKind::Network,
            ConnectorError::Remote { .. } => ErrorKind::Remote,
            ConnectorError::Decode(_) => ErrorKind::Decode,
        }
    }

    pub fn missing(field: &str) -> Self {
        ConnectorError::Validation(format!("required field '{}' is missing or empty", field))
    }
}

/// Initialization errors for Connector
#[derive(Debug, Error)]
pub enum ConnectorInitError {
    #[error("Failed to create HTTP client: {0}")]
    ClientError(#[from] reqwest::Error),
}
