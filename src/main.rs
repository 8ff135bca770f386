mod connector;
mod node;

use clap::Parser;
use connector::{Connector, ConnectorInitError, HttpTransport, StubTransport, Transport};
use node::{
    ItemOverlay, NodeDescription, NodeItem, NodeRunner, NodeSettings, ParameterSource,
    TransportKind,
};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{Level, error, info};
use tracing_subscriber::fmt;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "lakehouse-connector")]
#[command(about = "Query the data lakehouse task service and print the node output as JSON")]
struct Args {
    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input items as a JSON array, '-' reads stdin
    #[arg(short, long)]
    items: Option<PathBuf>,

    /// Record per-item failures instead of aborting the batch
    #[arg(long)]
    continue_on_fail: bool,

    /// Answer with the configured stub response instead of calling the service
    #[arg(long)]
    stub: bool,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print the node description and exit
    #[arg(long)]
    describe: bool,

    /// Let each input item's own fields override the node parameters
    #[arg(long)]
    item_overrides: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Items may be given as host items (`{"json": {...}, "pairedItem": ...}`) or
/// as bare objects. Host bookkeeping keys next to `json` are dropped.
fn parse_items(raw: &str) -> Result<Vec<NodeItem>, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_str(raw)?;
    values
        .into_iter()
        .map(|v| match v {
            Value::Object(mut obj) => match obj.remove("json") {
                Some(Value::Object(inner)) => Ok(NodeItem::new(inner)),
                Some(other) => {
                    obj.insert("json".to_string(), other);
                    Ok(NodeItem::new(obj))
                }
                None => Ok(NodeItem::new(obj)),
            },
            other => serde_json::from_value(other),
        })
        .collect()
}

fn read_items(path: &Path) -> Result<Vec<NodeItem>, Box<dyn std::error::Error>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(parse_items(&raw)?)
}

fn build_transport(settings: &NodeSettings) -> Result<Arc<dyn Transport>, ConnectorInitError> {
    let transport: Arc<dyn Transport> = match settings.transport {
        TransportKind::Http => Arc::new(HttpTransport::new(settings.request_timeout_secs)?),
        TransportKind::Stub => Arc::new(
            settings
                .stub_response
                .clone()
                .map(StubTransport::new)
                .unwrap_or_default(),
        ),
    };
    Ok(transport)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if args.describe {
        println!("{}", serde_json::to_string_pretty(&NodeDescription::default())?);
        return Ok(());
    }

    let config_path = args.config.clone().unwrap_or_else(NodeSettings::default_path);
    let mut settings = NodeSettings::load(&config_path)?;
    settings.apply_env();
    if args.continue_on_fail {
        settings.continue_on_fail = true;
    }
    if args.stub {
        settings.transport = TransportKind::Stub;
    }
    if args.timeout.is_some() {
        settings.request_timeout_secs = args.timeout;
    }

    info!(
        config = %config_path.display(),
        transport = ?settings.transport,
        mode = ?settings.mode(),
        "configuration loaded"
    );

    let items = match &args.items {
        Some(path) => read_items(path)?,
        None => Vec::new(),
    };

    let connector = Connector::new(build_transport(&settings)?);
    let runner = NodeRunner::new(connector, settings.mode());
    let overlay = ItemOverlay::new(&settings.parameters, &items);
    let params: &dyn ParameterSource = if args.item_overrides {
        &overlay
    } else {
        &settings.parameters
    };

    match runner.run(&items, params).await {
        Ok(outputs) => {
            // One output connection
            println!("{}", serde_json::to_string_pretty(&[outputs])?);
            Ok(())
        }
        Err(e) => {
            error!(item_index = e.item_index, error = %e, "connector node failed");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_objects_become_items() {
        let items = parse_items(r#"[{"order": 1}, {"order": 2}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].json.get("order"), Some(&json!(2)));
    }

    #[test]
    fn wrapped_items_are_unwrapped() {
        let items = parse_items(r#"[{"json": {"order": 1}}]"#).unwrap();
        assert_eq!(items[0].json.get("order"), Some(&json!(1)));
        assert!(items[0].json.get("json").is_none());
    }

    #[test]
    fn host_bookkeeping_keys_are_dropped() {
        let items = parse_items(
            r#"[{"json": {"order": 1}, "pairedItem": {"item": 0}, "binary": {}}]"#,
        )
        .unwrap();
        assert_eq!(items[0].json.len(), 1);
        assert_eq!(items[0].json.get("order"), Some(&json!(1)));
    }

    #[test]
    fn non_object_json_field_stays_a_bare_field() {
        let items = parse_items(r#"[{"json": "text", "order": 3}]"#).unwrap();
        assert_eq!(items[0].json.get("json"), Some(&json!("text")));
        assert_eq!(items[0].json.get("order"), Some(&json!(3)));
    }

    #[test]
    fn non_object_entries_are_rejected() {
        assert!(parse_items("[1]").is_err());
        assert!(parse_items(r#"["item"]"#).is_err());
        assert!(parse_items(r#"{"order": 1}"#).is_err());
    }
}
