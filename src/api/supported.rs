//! Listings of the locations the cloud API has data for.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::location::require_named;
use crate::transport::Transport;

/// Supported-location listings, narrowing from countries down to stations.
pub struct SupportedApi {
    transport: Arc<Transport>,
}

impl SupportedApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Lists all supported countries.
    pub async fn countries(&self) -> Result<Value> {
        self.transport.get_api("countries", Vec::new()).await
    }

    /// Lists the supported states within `country`.
    pub async fn states(&self, country: &str) -> Result<Value> {
        require_named(&[("country", country)])?;
        self.transport
            .get_api("states", vec![("country", country.to_string())])
            .await
    }

    /// Lists the supported cities within `state` and `country`.
    pub async fn cities(&self, country: &str, state: &str) -> Result<Value> {
        require_named(&[("country", country), ("state", state)])?;
        self.transport
            .get_api(
                "cities",
                vec![
                    ("state", state.to_string()),
                    ("country", country.to_string()),
                ],
            )
            .await
    }

    /// Lists the supported stations within `city`, `state`, and `country`.
    pub async fn stations(&self, city: &str, state: &str, country: &str) -> Result<Value> {
        require_named(&[("city", city), ("state", state), ("country", country)])?;
        self.transport
            .get_api(
                "stations",
                vec![
                    ("city", city.to_string()),
                    ("state", state.to_string()),
                    ("country", country.to_string()),
                ],
            )
            .await
    }
}
