//! Ethereum JSON-RPC transport.
//!
//! A minimal client speaking JSON-RPC 2.0 over HTTP. Every enskit operation
//! is one request/response pair with no retries and no backoff; a transport
//! failure or an error object from the node propagates directly to the
//! caller.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use enskit_core::error::{EnsError, Result};

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

fn data_string(data: Value) -> String {
    match data {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// JSON-RPC client bound to one node URL.
#[derive(Debug)]
pub struct RpcClient {
    http: reqwest::Client,
    url: Url,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Creates a client for the given node URL.
    ///
    /// Fails synchronously on an unparseable URL, before anything is sent.
    pub fn new(rpc_url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(rpc_url)
            .map_err(|e| EnsError::Config(format!("invalid RPC URL '{rpc_url}': {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EnsError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            url,
            next_id: AtomicU64::new(1),
        })
    }

    /// Returns the node URL this client talks to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Sends one JSON-RPC request and deserializes the `result` field.
    ///
    /// An `error` object in the response becomes [`EnsError::Rpc`]; HTTP
    /// failures become [`EnsError::Http`].
    pub async fn request<R: DeserializeOwned>(&self, method: &str, params: Value) -> Result<R> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let payload = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!(method, id, "sending JSON-RPC request");

        let response = self
            .http
            .post(self.url.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| EnsError::Http(e.to_string()))?;

        let body: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| EnsError::Http(e.to_string()))?;

        if let Some(error) = body.error {
            debug!(method, code = error.code, "JSON-RPC error response");
            return Err(EnsError::Rpc {
                code: error.code,
                message: error.message,
                data: error.data.map(data_string),
            });
        }

        Ok(serde_json::from_value(body.result.unwrap_or(Value::Null))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_fails_before_any_network_call() {
        let err = RpcClient::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_error_data_string_formats() {
        assert_eq!(data_string(Value::String("0xdead".into())), "0xdead");
        assert_eq!(data_string(json!({"reason": "bad"})), r#"{"reason":"bad"}"#);
    }
}
