// Data types for Connector module

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Fixed route on the lakehouse service
pub const TASK_GOODS_PATH: &str = "/api/v1/task/goods";

/// Page size sent with every request
pub const REQUEST_LIMIT: u32 = 10;

/// Port used when the configuration source leaves it unset
pub const DEFAULT_PORT: i64 = 8080;

/// Build the target URL. Host and port are interpolated verbatim.
pub fn build_url(host: &str, port: i64) -> String {
    format!("http://{}:{}{}", host, port, TASK_GOODS_PATH)
}

/// Outbound request, derived from a config and discarded after the call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    pub url: String,
    pub body: Value,
}

impl RequestEnvelope {
    pub fn new(host: &str, port: i64) -> Self {
        // Prompts are not part of the payload yet; the service only takes a limit.
        Self {
            url: build_url(host, port),
            body: json!({ "limit": REQUEST_LIMIT }),
        }
    }
}

/// Echo of the request parameters carried in every result.
/// The password is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEcho {
    pub host: String,
    pub port: i64,
    pub user: String,
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Successful call result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    pub status: String,
    pub timestamp: String,
    pub request: RequestEcho,
    pub response_data: Value,
}

impl ResultEnvelope {
    pub fn success(request: RequestEcho, response_data: Value) -> Self {
        Self {
            status: "success".to_string(),
            timestamp: iso_timestamp(),
            request,
            response_data,
        }
    }
}

/// Current UTC instant with millisecond precision and a `Z` suffix
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
