// ConfigBuilder - chainable builder for ConnectorConfig

use super::{ConnectorConfig, ConnectorError, DEFAULT_PORT};

pub struct ConfigBuilder {
    host: String,
    port: i64,
    username: String,
    password: String,
    system_prompt: String,
    user_prompt: String,
}

impl ConfigBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            username: String::new(),
            password: String::new(),
            system_prompt: String::new(),
            user_prompt: String::new(),
        }
    }

    pub fn port(mut self, port: i64) -> Self {
        self.port = port;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn user_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.user_prompt = prompt.into();
        self
    }

    pub fn build(self) -> Result<ConnectorConfig, ConnectorError> {
        let config = ConnectorConfig {
            host: self.host,
            port: self.port,
            username: self.username,
            password: self.password,
            system_prompt: self.system_prompt,
            user_prompt: self.user_prompt,
        };
        config.validate()?;
        Ok(config)
    }
}
