//! Location resolver: exchange name → headquarters address, coordinates,
//! and a map embed reference

use crate::error::AgentError;
use crate::knowledge;
use crate::models::LocationReport;
use crate::Result;
use std::env;

pub struct LocationResolver {
    maps_api_key: Option<String>,
}

impl LocationResolver {
    pub fn new(maps_api_key: Option<String>) -> Self {
        let maps_api_key = maps_api_key.filter(|key| !key.trim().is_empty());
        Self { maps_api_key }
    }

    /// Build a resolver from `GOOGLE_MAPS_API_KEY` if set.
    pub fn from_env() -> Self {
        Self::new(env::var("GOOGLE_MAPS_API_KEY").ok())
    }

    /// Resolve an exchange name to its headquarters facts. Purely local:
    /// table lookup plus URL templating, no network call.
    pub fn resolve(&self, exchange: &str) -> Result<LocationReport> {
        let (name, location) = knowledge::location_for(exchange)
            .ok_or_else(|| AgentError::UnknownExchange(exchange.trim().to_string()))?;

        Ok(LocationReport {
            exchange: name.to_string(),
            address: location.address.to_string(),
            latitude: location.lat,
            longitude: location.lng,
            map_url: self.map_url(location),
        })
    }

    /// With an API key, the Google Maps Embed place URL; without one, a
    /// plain coordinate link that needs no key. Both are deterministic.
    fn map_url(&self, location: &knowledge::ExchangeLocation) -> String {
        match &self.maps_api_key {
            Some(key) => format!(
                "https://www.google.com/maps/embed/v1/place?key={}&q={}&zoom=15",
                key,
                location.query.replace(' ', "+")
            ),
            None => format!(
                "https://www.google.com/maps?q={},{}",
                location.lat, location.lng
            ),
        }
    }
}
