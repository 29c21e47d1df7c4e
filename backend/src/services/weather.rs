//! Weather service: lookups by coordinates or place name
//!
//! Current-conditions lookups degrade to the placeholder snapshot so the page
//! always renders something. Forecast lookups report failures explicitly.

use shared::{Coordinates, ForecastByDay, ResolvedPlace, TileCoord, WeatherSnapshot};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::{build_http_client, GeocodingClient, TileClient, WeatherClient};

/// Weather service wrapping every upstream integration
#[derive(Clone)]
pub struct WeatherService {
    weather_client: WeatherClient,
    geocoding_client: GeocodingClient,
    tile_client: TileClient,
}

impl WeatherService {
    /// Create a new WeatherService from configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let http = build_http_client(config.request_timeout())?;
        let timezone = config
            .display_timezone()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        Ok(Self {
            weather_client: WeatherClient::new(http.clone(), &config.weather, timezone),
            geocoding_client: GeocodingClient::new(http.clone(), &config.weather),
            tile_client: TileClient::new(http, &config.weather),
        })
    }

    /// Fetch current conditions, reporting upstream failures
    pub async fn fetch_current(&self, coords: Coordinates) -> AppResult<WeatherSnapshot> {
        self.weather_client.get_current_weather(coords).await
    }

    /// Fetch current conditions, falling back to the placeholder snapshot
    pub async fn current_or_default(&self, coords: Coordinates) -> WeatherSnapshot {
        match self.fetch_current(coords).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(
                    lat = coords.latitude,
                    lon = coords.longitude,
                    "Current weather unavailable, using placeholder: {}",
                    e
                );
                WeatherSnapshot::placeholder()
            }
        }
    }

    /// Fetch the forecast grouped by day (daytime entries only)
    pub async fn forecast(&self, coords: Coordinates) -> AppResult<ForecastByDay> {
        let entries = self.weather_client.get_forecast(coords).await?;
        let total = entries.len();
        let forecast = ForecastByDay::from_entries(entries);
        tracing::debug!(
            "Bucketed {} forecast entries into {} days",
            total,
            forecast.len()
        );
        Ok(forecast)
    }

    /// Resolve a place name to coordinates
    pub async fn resolve_place(&self, place: &str) -> AppResult<ResolvedPlace> {
        self.geocoding_client.resolve(place).await
    }

    /// Current conditions for a place name, with the resolved position attached.
    ///
    /// An unknown place yields the placeholder snapshot.
    pub async fn search(&self, place: &str) -> WeatherSnapshot {
        match self.resolve_place(place).await {
            Ok(found) => {
                let coords = found.coordinates;
                self.current_or_default(coords)
                    .await
                    .with_position(coords.latitude, coords.longitude)
            }
            Err(_) => WeatherSnapshot::placeholder(),
        }
    }

    /// Forecast for a place name
    pub async fn search_forecast(&self, place: &str) -> AppResult<ForecastByDay> {
        let found = self.resolve_place(place).await?;
        self.forecast(found.coordinates).await
    }

    /// Open an upstream tile response for streaming
    pub async fn tile(&self, tile: TileCoord) -> AppResult<reqwest::Response> {
        self.tile_client.fetch(tile).await
    }
}
