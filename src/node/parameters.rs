// Parameter lookup - per-item resolution of node parameters into a ConnectorConfig

use crate::connector::{ConfigBuilder, ConnectorConfig, ConnectorError, DEFAULT_PORT};
use crate::node::description::{self, ParameterKind};
use crate::node::types::NodeItem;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Where parameter values come from. `item_index` lets a source vary
/// values per item; sources that don't may ignore it.
pub trait ParameterSource: Send + Sync {
    fn parameter(&self, name: &str, item_index: usize) -> Option<Value>;
}

/// Same values for every item
impl ParameterSource for Map<String, Value> {
    fn parameter(&self, name: &str, _item_index: usize) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Static parameters with the item's own fields layered on top
pub struct ItemOverlay<'a> {
    base: &'a Map<String, Value>,
    items: &'a [NodeItem],
}

impl<'a> ItemOverlay<'a> {
    pub fn new(base: &'a Map<String, Value>, items: &'a [NodeItem]) -> Self {
        Self { base, items }
    }
}

impl ParameterSource for ItemOverlay<'_> {
    fn parameter(&self, name: &str, item_index: usize) -> Option<Value> {
        self.items
            .get(item_index)
            .and_then(|item| item.json.get(name))
            .or_else(|| self.base.get(name))
            .cloned()
    }
}

/// Read a parameter, falling back to its declared default when absent or null
fn lookup(source: &dyn ParameterSource, name: &str, item_index: usize) -> Value {
    match source.parameter(name, item_index) {
        Some(Value::Null) | None => description::parameter(name)
            .map(|decl| decl.default.to_value())
            .unwrap_or(Value::Null),
        Some(v) => v,
    }
}

fn string_param(
    source: &dyn ParameterSource,
    name: &str,
    item_index: usize,
) -> Result<String, ConnectorError> {
    match lookup(source, name, item_index) {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        other => Err(ConnectorError::Validation(format!(
            "parameter '{}' must be a string, got {}",
            name, other
        ))),
    }
}

/// Accepts integers, integral floats and numeric strings
pub fn coerce_port(value: &Value) -> Result<i64, ConnectorError> {
    let invalid = || ConnectorError::Validation(format!("parameter 'port' is not a number: {}", value));
    match value {
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            // Bounds are exact powers of two, so the cast below cannot saturate.
            Some(f) if f.fract() == 0.0 && f >= -(2f64.powi(63)) && f < 2f64.powi(63) => {
                Ok(f as i64)
            }
            _ => Err(invalid()),
        },
        // Integers beyond i64 are rejected rather than clamped.
        Value::Number(n) => n.as_i64().ok_or_else(invalid),
        Value::String(s) if s.trim().is_empty() => Err(ConnectorError::missing("port")),
        Value::String(s) => s.trim().parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Resolve every declared parameter for one item and check the required ones
pub fn resolve_config(
    source: &dyn ParameterSource,
    item_index: usize,
) -> Result<ConnectorConfig, ConnectorError> {
    let mut strings = HashMap::new();
    let mut port = DEFAULT_PORT;

    for decl in description::PARAMETERS {
        match decl.kind {
            ParameterKind::Number => port = coerce_port(&lookup(source, decl.name, item_index))?,
            ParameterKind::String => {
                let value = string_param(source, decl.name, item_index)?;
                if decl.required && value.trim().is_empty() {
                    return Err(ConnectorError::missing(decl.name));
                }
                strings.insert(decl.name, value);
            }
        }
    }

    let mut take = |name: &str| strings.remove(name).unwrap_or_default();
    ConfigBuilder::new(take("host"))
        .port(port)
        .username(take("username"))
        .password(take("password"))
        .system_prompt(take("system_prompt"))
        .user_prompt(take("user_prompt"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn port_coercion() {
        assert_eq!(coerce_port(&json!(8080)).unwrap(), 8080);
        assert_eq!(coerce_port(&json!(9090.0)).unwrap(), 9090);
        assert_eq!(coerce_port(&json!(" 7000 ")).unwrap(), 7000);
        assert!(coerce_port(&json!(80.5)).is_err());
        assert!(coerce_port(&json!("http")).is_err());
        assert!(coerce_port(&json!(true)).is_err());
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = coerce_port(&json!(u64::MAX)).unwrap_err();
        assert_eq!(err.kind(), crate::connector::ErrorKind::Validation);
        assert!(coerce_port(&json!(1e19)).is_err());
        assert!(coerce_port(&json!("18446744073709551615")).is_err());
        assert_eq!(coerce_port(&json!(i64::MAX)).unwrap(), i64::MAX);
        assert_eq!(coerce_port(&json!(-1)).unwrap(), -1);
    }

    #[test]
    fn defaults_fill_missing_parameters() {
        let source = params(json!({ "host": "10.0.0.1", "user_prompt": "hi" }));
        let config = resolve_config(&source, 0).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.username, "");
        assert_eq!(config.system_prompt, "");
    }

    #[test]
    fn null_port_falls_back_to_default() {
        let source = params(json!({ "host": "h", "port": null, "user_prompt": "hi" }));
        assert_eq!(resolve_config(&source, 0).unwrap().port, 8080);
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        let source = params(json!({ "host": "h" }));
        let err = resolve_config(&source, 0).unwrap_err();
        assert!(err.to_string().contains("user_prompt"));

        let source = params(json!({ "user_prompt": "hi" }));
        let err = resolve_config(&source, 0).unwrap_err();
        assert!(err.to_string().contains("host"));
    }

    #[test]
    fn wrong_type_is_validation_error() {
        let source = params(json!({ "host": 42, "user_prompt": "hi" }));
        let err = resolve_config(&source, 0).unwrap_err();
        assert_eq!(err.kind(), crate::connector::ErrorKind::Validation);
    }

    #[test]
    fn item_fields_override_static_parameters() {
        let base = params(json!({ "host": "base", "user_prompt": "hi" }));
        let items = vec![
            NodeItem::default(),
            NodeItem::new(params(json!({ "host": "override", "port": 9000 }))),
        ];
        let overlay = ItemOverlay::new(&base, &items);

        assert_eq!(resolve_config(&overlay, 0).unwrap().host, "base");
        let second = resolve_config(&overlay, 1).unwrap();
        assert_eq!(second.host, "override");
        assert_eq!(second.port, 9000);
        assert_eq!(second.user_prompt, "hi");
    }
}
