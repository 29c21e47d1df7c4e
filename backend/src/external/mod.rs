//! External API integrations

pub mod geocoding;
pub mod tiles;
pub mod weather;

use std::time::Duration;

use reqwest::Client;

use crate::error::{AppError, AppResult};

pub use geocoding::GeocodingClient;
pub use tiles::TileClient;
pub use weather::WeatherClient;

const USER_AGENT: &str = concat!("weathermap/", env!("CARGO_PKG_VERSION"));

/// Build the pooled HTTP client shared by every upstream integration
pub fn build_http_client(timeout: Duration) -> AppResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {}", e)))
}
