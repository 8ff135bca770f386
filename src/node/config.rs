// Node settings - TOML file plus environment overrides

use crate::node::error::SettingsError;
use crate::node::types::ExecutionMode;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Which remote-call strategy to wire in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Http,
    Stub,
}

impl std::str::FromStr for TransportKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(TransportKind::Http),
            "stub" => Ok(TransportKind::Stub),
            other => Err(SettingsError::Invalid(format!("unknown transport '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct NodeSection {
    continue_on_fail: bool,
    transport: TransportKind,
    stub_response: Option<Value>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    node: NodeSection,
    parameters: Map<String, Value>,
}

/// Everything the binary needs to build and run the node
#[derive(Debug, Clone, Default)]
pub struct NodeSettings {
    /// Node parameters keyed by their declared names
    pub parameters: Map<String, Value>,
    pub continue_on_fail: bool,
    pub transport: TransportKind,
    /// Canned reply for the stub transport
    pub stub_response: Option<Value>,
    /// Unset keeps the HTTP client default
    pub request_timeout_secs: Option<u64>,
}

/// Environment variables mapped onto string parameters
const PARAMETER_ENV: &[(&str, &str)] = &[
    ("LAKEHOUSE_HOST", "host"),
    ("LAKEHOUSE_USERNAME", "username"),
    ("LAKEHOUSE_PASSWORD", "password"),
    ("LAKEHOUSE_SYSTEM_PROMPT", "system_prompt"),
    ("LAKEHOUSE_USER_PROMPT", "user_prompt"),
];

/// Parse an override, logging a warning if the value is present but invalid.
fn parse_override<T: std::str::FromStr>(name: &str, value: Option<String>) -> Option<T> {
    let v = value?;
    match v.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(var = name, value = %v, "Invalid env var value, ignoring");
            None
        }
    }
}

impl NodeSettings {
    /// Default settings location under the user config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("lakehouse-connector").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("lakehouse-connector.toml"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let file: SettingsFile = toml::from_str(content)?;
        Ok(Self {
            parameters: file.parameters,
            continue_on_fail: file.node.continue_on_fail,
            transport: file.node.transport,
            stub_response: file.node.stub_response,
            request_timeout_secs: file.node.request_timeout_secs,
        })
    }

    /// Load from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            parameters = settings.parameters.len(),
            "loaded settings file"
        );
        Ok(settings)
    }

    /// Apply `LAKEHOUSE_*` overrides from the process environment and `.env`
    pub fn apply_env(&mut self) {
        dotenvy::dotenv().ok();
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for &(var, param) in PARAMETER_ENV {
            if let Some(v) = lookup(var) {
                self.parameters.insert(param.to_string(), Value::String(v));
            }
        }

        if let Some(port) = parse_override::<i64>("LAKEHOUSE_PORT", lookup("LAKEHOUSE_PORT")) {
            self.parameters.insert("port".to_string(), Value::from(port));
        }
        if let Some(flag) =
            parse_override::<bool>("LAKEHOUSE_CONTINUE_ON_FAIL", lookup("LAKEHOUSE_CONTINUE_ON_FAIL"))
        {
            self.continue_on_fail = flag;
        }
        if let Some(kind) = parse_override::<TransportKind>("LAKEHOUSE_TRANSPORT", lookup("LAKEHOUSE_TRANSPORT")) {
            self.transport = kind;
        }
        if let Some(secs) =
            parse_override::<u64>("LAKEHOUSE_TIMEOUT_SECS", lookup("LAKEHOUSE_TIMEOUT_SECS"))
        {
            self.request_timeout_secs = Some(secs);
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        ExecutionMode::from_flag(self.continue_on_fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn parses_full_settings_file() {
        let settings = NodeSettings::from_toml_str(
            r#"
[node]
continue_on_fail = true
transport = "stub"
request_timeout_secs = 15

[node.stub_response]
rows = [1, 2, 3]

[parameters]
host = "127.0.0.1"
port = 9000
user_prompt = "list top products"
"#,
        )
        .unwrap();

        assert!(settings.continue_on_fail);
        assert_eq!(settings.mode(), ExecutionMode::ContinueOnFail);
        assert_eq!(settings.transport, TransportKind::Stub);
        assert_eq!(settings.request_timeout_secs, Some(15));
        assert_eq!(settings.stub_response, Some(json!({ "rows": [1, 2, 3] })));
        assert_eq!(settings.parameters["host"], json!("127.0.0.1"));
        assert_eq!(settings.parameters["port"], json!(9000));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let settings = NodeSettings::from_toml_str("").unwrap();
        assert!(!settings.continue_on_fail);
        assert_eq!(settings.transport, TransportKind::Http);
        assert!(settings.parameters.is_empty());
        assert_eq!(settings.request_timeout_secs, None);
    }

    #[test]
    fn unknown_transport_is_rejected() {
        let result = NodeSettings::from_toml_str("[node]\ntransport = \"grpc\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let settings = NodeSettings::load(Path::new("/nonexistent/lakehouse.toml")).unwrap();
        assert!(settings.parameters.is_empty());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut settings =
            NodeSettings::from_toml_str("[parameters]\nhost = \"file-host\"\nport = 1\n").unwrap();
        let env: HashMap<&str, &str> = HashMap::from([
            ("LAKEHOUSE_HOST", "env-host"),
            ("LAKEHOUSE_PORT", "8181"),
            ("LAKEHOUSE_TRANSPORT", "stub"),
            ("LAKEHOUSE_CONTINUE_ON_FAIL", "true"),
        ]);
        settings.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(settings.parameters["host"], json!("env-host"));
        assert_eq!(settings.parameters["port"], json!(8181));
        assert_eq!(settings.transport, TransportKind::Stub);
        assert!(settings.continue_on_fail);
    }

    #[test]
    fn invalid_numeric_override_is_ignored() {
        let mut settings = NodeSettings::from_toml_str("[parameters]\nport = 7000\n").unwrap();
        settings.apply_overrides(|name| (name == "LAKEHOUSE_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(settings.parameters["port"], json!(7000));
    }
}
