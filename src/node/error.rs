// Node errors

use crate::connector::ConnectorError;
use thiserror::Error;

/// A connector failure tied to the batch position it came from
#[derive(Debug, Error)]
#[error("item {item_index}: {source}")]
pub struct NodeOperationError {
    pub item_index: usize,
    #[source]
    pub source: ConnectorError,
}

impl NodeOperationError {
    pub fn new(item_index: usize, source: ConnectorError) -> Self {
        Self { item_index, source }
    }
}

/// Settings loading errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
