// Node module - host adapter around the connector
// Resolves parameters per item, runs the connector over a batch and applies
// the fail-fast / continue-on-failure policy.

pub mod config;
pub mod description;
pub mod error;
pub mod parameters;
pub mod runner;
pub mod types;

pub use config::{NodeSettings, TransportKind};
pub use description::NodeDescription;
#[allow(unused_imports)]
pub use error::{NodeOperationError, SettingsError};
pub use parameters::{ItemOverlay, ParameterSource};
#[allow(unused_imports)]
pub use parameters::resolve_config;
pub use runner::NodeRunner;
pub use types::NodeItem;
#[allow(unused_imports)]
pub use types::{ErrorRecord, ExecutionMode, NodeOutput};
