//! Shared HTTP pipeline for cloud API requests.
//!
//! Every endpoint group funnels through [`Transport`]: build the URL from the
//! host scaffold and path, merge the query parameters with the API key, issue
//! the GET, then decode the body and classify the status before handing the
//! payload back.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{classify, AirVisualError, Result};
use crate::location::QueryPairs;

const API_SCAFFOLD: &str = "https://api.airvisual.com/v2";
const NODE_SCAFFOLD: &str = "https://www.airvisual.com/api/v2/node";

/// Issues GET requests against the two cloud API hosts.
///
/// Holds the credential and the HTTP client; both are read-only after
/// construction, so a single transport can serve concurrent calls.
pub(crate) struct Transport {
    http: Client,
    api_key: String,
    api_scaffold: String,
    node_scaffold: String,
}

impl Transport {
    pub(crate) fn new(api_key: String, http: Client) -> Self {
        Self {
            http,
            api_key,
            api_scaffold: API_SCAFFOLD.to_string(),
            node_scaffold: NODE_SCAFFOLD.to_string(),
        }
    }

    /// Points both host scaffolds at a mock server root.
    ///
    /// This is primarily intended for testing purposes (e.g., using a mock server).
    #[cfg(test)]
    pub(crate) fn with_server_root(api_key: String, root: &str) -> Self {
        Self {
            http: Client::new(),
            api_key,
            api_scaffold: format!("{root}/v2"),
            node_scaffold: format!("{root}/api/v2/node"),
        }
    }

    /// GET an endpoint of the general API host.
    pub(crate) async fn get_api(&self, path: &str, params: QueryPairs) -> Result<Value> {
        self.get(format!("{}/{}", self.api_scaffold, path), params)
            .await
    }

    /// GET a node document from the device data host.
    pub(crate) async fn get_node(&self, node_id: &str) -> Result<Value> {
        self.get(format!("{}/{}", self.node_scaffold, node_id), Vec::new())
            .await
    }

    async fn get(&self, url: String, params: QueryPairs) -> Result<Value> {
        debug!("GET {} ({} parameters)", url, params.len());

        let response = self
            .http
            .get(&url)
            .query(&params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", url, e);
                AirVisualError::Connect(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(AirVisualError::Connect)?;

        let decoded = decode(&body)?;
        classify(status, &decoded)?;
        Ok(unwrap_data(decoded))
    }
}

/// Strict JSON parse of a response body.
fn decode(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|source| {
        error!("Response body is not valid JSON");
        AirVisualError::Malformed {
            body: body.to_string(),
            source,
        }
    })
}

/// Unwraps the success envelope `{"status": "success", "data": ...}`.
///
/// Callers receive the `data` member; documents without the envelope (the
/// node endpoint returns its payload bare) pass through whole.
fn unwrap_data(mut decoded: Value) -> Value {
    match decoded.get_mut("data") {
        Some(data) => data.take(),
        None => decoded,
    }
}
