//! Helpers shared by the outbound HTTP clients.

use crate::Result;
use serde_json::Value;
use std::time::Duration;

pub(crate) fn build_client(timeout_secs: u64) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

/// Extracts the `error` field of an upstream JSON body, if any.
///
/// Non-string values are rendered as their JSON text.
pub(crate) fn error_field(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
