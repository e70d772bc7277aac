//! Air quality lookups.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::location::Location;
use crate::transport::Transport;

/// Air quality operations: nearest city and station lookups plus the global
/// city ranking.
pub struct AirQualityApi {
    transport: Arc<Transport>,
}

impl AirQualityApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Looks up air quality for the city nearest to `location`.
    ///
    /// A `Location::City` address queries the named city directly; the other
    /// modes resolve to the closest supported city. Returns the decoded city
    /// document as raw JSON.
    pub async fn nearest_city(&self, location: &Location) -> Result<Value> {
        let (path, params) = location.city_query()?;
        self.transport.get_api(path, params).await
    }

    /// Looks up air quality reported by the monitoring station nearest to
    /// `location`.
    ///
    /// A `Location::Station` address queries the named station directly.
    pub async fn nearest_station(&self, location: &Location) -> Result<Value> {
        let (path, params) = location.station_query()?;
        self.transport.get_api(path, params).await
    }

    /// Fetches the global ranking of major cities by air quality.
    pub async fn ranking(&self) -> Result<Value> {
        self.transport.get_api("city_ranking", Vec::new()).await
    }
}
