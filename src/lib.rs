//! Async client library for the AirVisual cloud air quality API.
//!
//! Construct a [`CloudApi`] with your API key and call the endpoint groups it
//! exposes. Responses come back as raw [`serde_json::Value`] documents, with
//! the API's success envelope already unwrapped; failures are reported
//! through [`AirVisualError`].
//!
//! ```no_run
//! use airvisual::{CloudApi, Location};
//!
//! # async fn run() -> airvisual::Result<()> {
//! let cloud_api = CloudApi::new("<YOUR_AIRVISUAL_API_KEY>");
//!
//! // Nearest city by explicit coordinates:
//! let data = cloud_api
//!     .air_quality
//!     .nearest_city(&Location::coordinates(34.0522, -118.2437))
//!     .await?;
//! println!("{data}");
//!
//! // Supported states within a country:
//! let states = cloud_api.supported.states("USA").await?;
//! println!("{states}");
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod location;
mod transport;

pub use api::{AirQualityApi, NodeApi, SupportedApi};
pub use error::{AirVisualError, Result};
pub use location::Location;

use std::sync::Arc;

use reqwest::Client;

use crate::transport::Transport;

/// The cloud API facade.
///
/// Holds the credential and the HTTP client, and exposes one field per
/// endpoint group. The groups are built once at construction and share the
/// underlying transport, so the facade is cheap to pass around by reference
/// and safe to use from concurrent tasks.
pub struct CloudApi {
    /// Air quality lookups (nearest city/station, city ranking).
    pub air_quality: AirQualityApi,
    /// Supported country/state/city/station listings.
    pub supported: SupportedApi,
    /// Registered sensor device lookups.
    pub node: NodeApi,
}

impl CloudApi {
    /// Creates a client that owns a fresh HTTP connection pool.
    ///
    /// The pool is released when the facade is dropped.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(api_key, Client::new())
    }

    /// Creates a client on top of a caller-supplied `reqwest::Client`.
    ///
    /// reqwest clients are reference-counted internally, so one client can
    /// back several facades (e.g., one per API key) without duplicating
    /// connection pools.
    pub fn with_client(api_key: impl Into<String>, http: Client) -> Self {
        Self::from_transport(Transport::new(api_key.into(), http))
    }

    /// Creates a client whose hosts point at a mock server root.
    ///
    /// This is primarily intended for testing purposes (e.g., using a mock server).
    #[cfg(test)]
    pub(crate) fn with_server_root(api_key: &str, root: &str) -> Self {
        Self::from_transport(Transport::with_server_root(api_key.to_string(), root))
    }

    fn from_transport(transport: Transport) -> Self {
        let transport = Arc::new(transport);
        Self {
            air_quality: AirQualityApi::new(Arc::clone(&transport)),
            supported: SupportedApi::new(Arc::clone(&transport)),
            node: NodeApi::new(transport),
        }
    }
}
