use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use near_bind_core::TransportError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: u32 = 3;

/// JSON-RPC 2.0 client. Connection-level failures get a bounded exponential
/// backoff; errors the endpoint itself reports are returned untranslated.
#[derive(Debug, Clone)]
pub struct JsonRpcClient {
    endpoint: String,
    client: reqwest::Client,
}

impl JsonRpcClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        JsonRpcClient {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": "near-bind",
            "method": method,
            "params": params,
        });

        let mut retries = 0u32;
        loop {
            match self
                .client
                .post(&self.endpoint)
                .header("Content-Type", "application/json")
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let body = response
                        .json::<Value>()
                        .await
                        .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

                    if let Some(error) = body.get("error") {
                        return Err(TransportError::Rpc(error.clone()));
                    }

                    debug!(method, endpoint = %self.endpoint, "rpc call ok");
                    return body
                        .get("result")
                        .cloned()
                        .ok_or_else(|| {
                            TransportError::InvalidResponse("no result in rpc response".into())
                        });
                }
                Err(e) if retries < MAX_RETRIES => {
                    retries += 1;
                    let backoff = Duration::from_millis(100 * 2_u64.pow(retries - 1));
                    warn!(method, retries, error = %e, "rpc call failed, backing off");
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => {
                    return Err(TransportError::Request(format!(
                        "rpc call failed after {} retries: {}",
                        MAX_RETRIES, e
                    )));
                }
            }
        }
    }
}
