//! Location addressing for air quality lookups.
//!
//! The cloud API accepts three interchangeable ways of naming a place:
//! explicit coordinates, the caller's IP address, or a named
//! city/station. `Location` models them as one sum type so every lookup
//! method takes a single argument and rejects invalid combinations before
//! any request is sent.

use crate::error::{AirVisualError, Result};

/// Query parameter pairs for a single endpoint call.
pub(crate) type QueryPairs = Vec<(&'static str, String)>;

/// How to address a place when looking up air quality data.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Let the API geolocate the IP address the request originates from.
    Ip,
    /// Explicit decimal latitude and longitude.
    Coordinates { latitude: f64, longitude: f64 },
    /// A named city within a state and country.
    City {
        city: String,
        state: String,
        country: String,
    },
    /// A named monitoring station within a city.
    Station {
        station: String,
        city: String,
        state: String,
        country: String,
    },
}

impl Location {
    /// Convenience constructor for `Location::Coordinates`.
    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        Self::Coordinates {
            latitude,
            longitude,
        }
    }

    /// Convenience constructor for `Location::City`.
    pub fn city(city: impl Into<String>, state: impl Into<String>, country: impl Into<String>) -> Self {
        Self::City {
            city: city.into(),
            state: state.into(),
            country: country.into(),
        }
    }

    /// Convenience constructor for `Location::Station`.
    pub fn station(
        station: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self::Station {
            station: station.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
        }
    }

    /// Resolves this location into the path and parameters of a city lookup.
    pub(crate) fn city_query(&self) -> Result<(&'static str, QueryPairs)> {
        match self {
            Self::Ip => Ok(("nearest_city", Vec::new())),
            Self::Coordinates {
                latitude,
                longitude,
            } => {
                validate_coordinates(*latitude, *longitude)?;
                Ok((
                    "nearest_city",
                    vec![("lat", latitude.to_string()), ("lon", longitude.to_string())],
                ))
            }
            Self::City {
                city,
                state,
                country,
            } => {
                require_named(&[("city", city), ("state", state), ("country", country)])?;
                Ok((
                    "city",
                    vec![
                        ("city", city.clone()),
                        ("state", state.clone()),
                        ("country", country.clone()),
                    ],
                ))
            }
            Self::Station { .. } => Err(AirVisualError::InvalidRequest(
                "a station name cannot address a city lookup".into(),
            )),
        }
    }

    /// Resolves this location into the path and parameters of a station lookup.
    pub(crate) fn station_query(&self) -> Result<(&'static str, QueryPairs)> {
        match self {
            Self::Ip => Ok(("nearest_station", Vec::new())),
            Self::Coordinates {
                latitude,
                longitude,
            } => {
                validate_coordinates(*latitude, *longitude)?;
                Ok((
                    "nearest_station",
                    vec![("lat", latitude.to_string()), ("lon", longitude.to_string())],
                ))
            }
            Self::Station {
                station,
                city,
                state,
                country,
            } => {
                require_named(&[
                    ("station", station),
                    ("city", city),
                    ("state", state),
                    ("country", country),
                ])?;
                Ok((
                    "station",
                    vec![
                        ("station", station.clone()),
                        ("city", city.clone()),
                        ("state", state.clone()),
                        ("country", country.clone()),
                    ],
                ))
            }
            Self::City { .. } => Err(AirVisualError::InvalidRequest(
                "a named station lookup requires the station name".into(),
            )),
        }
    }
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    // Range checks also reject NaN and infinities.
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(AirVisualError::InvalidRequest(format!(
            "latitude {latitude} is outside [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(AirVisualError::InvalidRequest(format!(
            "longitude {longitude} is outside [-180, 180]"
        )));
    }
    Ok(())
}

pub(crate) fn require_named(fields: &[(&str, &str)]) -> Result<()> {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(AirVisualError::InvalidRequest(format!(
                "{name} must not be blank"
            )));
        }
    }
    Ok(())
}
