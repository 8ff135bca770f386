// Connector module - lakehouse task client
// Builds the fixed POST request, sends it through a pluggable transport and
// wraps the reply in a result envelope.

pub mod builder;
pub mod client;
pub mod error;
pub mod operation;
pub mod transport;
pub mod types;

pub use builder::ConfigBuilder;
pub use client::HttpTransport;
pub use error::{ConnectorError, ConnectorInitError};
#[allow(unused_imports)]
pub use error::ErrorKind;
pub use operation::Connector;
pub use transport::{StubTransport, Transport};
pub use types::{DEFAULT_PORT, RequestEcho, RequestEnvelope, ResultEnvelope};
#[allow(unused_imports)]
pub use types::build_url;

/// Connection parameters for one call
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectorConfig {
    /// Lakehouse service address
    pub host: String,
    /// Lakehouse service port, not range-checked
    pub port: i64,
    /// Echoed in the result, not used for authentication
    pub username: String,
    /// Collected but not sent anywhere yet
    pub password: String,
    pub system_prompt: String,
    pub user_prompt: String,
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("system_prompt", &self.system_prompt)
            .field("user_prompt", &self.user_prompt)
            .finish()
    }
}

impl ConnectorConfig {
    /// Check the required fields. Nothing else is validated.
    pub fn validate(&self) -> Result<(), ConnectorError> {
        if self.host.trim().is_empty() {
            return Err(ConnectorError::missing("host"));
        }
        if self.user_prompt.trim().is_empty() {
            return Err(ConnectorError::missing("user_prompt"));
        }
        Ok(())
    }

    pub fn request(&self) -> RequestEnvelope {
        RequestEnvelope::new(&self.host, self.port)
    }

    pub fn echo(&self) -> RequestEcho {
        RequestEcho {
            host: self.host.clone(),
            port: self.port,
            user: self.username.clone(),
            system_prompt: self.system_prompt.clone(),
            user_prompt: self.user_prompt.clone(),
        }
    }
}
