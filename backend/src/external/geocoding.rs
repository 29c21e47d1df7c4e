//! Direct geocoding: place name to coordinates
//! Uses the OpenWeatherMap geocoding endpoint with the same API key.

use reqwest::Client;
use serde::Deserialize;
use shared::{Coordinates, ResolvedPlace};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct GeoMatch {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    country: String,
}

/// Geocoding API client
#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(client: Client, config: &WeatherConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.geo_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a place name to the best (first) match.
    ///
    /// Every failure, including an empty result list, is reported as
    /// [`AppError::PlaceNotFound`].
    pub async fn resolve(&self, place: &str) -> AppResult<ResolvedPlace> {
        match self.lookup(place).await {
            Ok(Some(found)) => {
                tracing::debug!("Resolved '{}' to {}, {}", place, found.name, found.country);
                Ok(found)
            }
            Ok(None) => {
                tracing::info!("No geocoding match for '{}'", place);
                Err(AppError::PlaceNotFound(place.to_string()))
            }
            Err(e) => {
                tracing::warn!("Geocoding lookup for '{}' failed: {}", place, e);
                Err(AppError::PlaceNotFound(place.to_string()))
            }
        }
    }

    async fn lookup(&self, place: &str) -> AppResult<Option<ResolvedPlace>> {
        let url = format!("{}/direct", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", place), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::upstream("geocoding", e))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "geocoding: status {}",
                response.status()
            )));
        }

        let matches: Vec<GeoMatch> = response
            .json()
            .await
            .map_err(|e| AppError::upstream("geocoding", e))?;

        Ok(matches.into_iter().next().map(|m| ResolvedPlace {
            name: m.name,
            country: m.country,
            coordinates: Coordinates::new(m.lat, m.lon),
        }))
    }
}
