//! Configuration management for the weather map server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WEATHERMAP_ prefix
//! 4. Plain `PORT` and `API_KEY` variables

use std::time::Duration;

use chrono_tz::Tz;
use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Upstream weather API configuration
    pub weather: WeatherConfig,

    /// Display configuration
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Directory served as static files (landing page, scripts, wasm package)
    pub static_dir: String,
}

#[derive(Deserialize, Clone)]
pub struct WeatherConfig {
    /// API key attached to every upstream request
    pub api_key: String,

    /// Current weather and forecast endpoint base
    pub api_base_url: String,

    /// Geocoding endpoint base
    pub geo_base_url: String,

    /// Map tile endpoint base
    pub tile_base_url: String,

    /// Tile layer name, e.g. temp_new
    pub tile_layer: String,

    /// Unit system requested upstream
    pub units: String,

    /// Language of upstream descriptions
    pub language: String,

    /// Timeout for every upstream request
    pub request_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// IANA timezone used for sunrise/sunset/current time strings
    pub timezone: String,
}

// Keeps the key out of logs
impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("geo_base_url", &self.geo_base_url)
            .field("tile_base_url", &self.tile_base_url)
            .field("tile_layer", &self.tile_layer)
            .field("units", &self.units)
            .field("language", &self.language)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("WEATHERMAP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "public")?
            .set_default("weather.api_base_url", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.geo_base_url", "https://api.openweathermap.org/geo/1.0")?
            .set_default("weather.tile_base_url", "https://tile.openweathermap.org/map")?
            .set_default("weather.tile_layer", "temp_new")?
            .set_default("weather.units", "metric")?
            .set_default("weather.language", "hr")?
            .set_default("weather.request_timeout_ms", 10_000)?
            .set_default("display.timezone", "Europe/Zagreb")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WEATHERMAP_ prefix)
            .add_source(
                Environment::with_prefix("WEATHERMAP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Plain variables from the classic .env layout
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("weather.api_key", std::env::var("API_KEY").ok())?
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the deserializer cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "weather.api_key must be set (WEATHERMAP_WEATHER__API_KEY or API_KEY)".into(),
            ));
        }
        self.display_timezone()?;
        Ok(())
    }

    /// Parsed display timezone
    pub fn display_timezone(&self) -> Result<Tz, ConfigError> {
        self.display
            .timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError::Message(format!("invalid display.timezone: {}", e)))
    }

    /// Upstream request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.weather.request_timeout_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            static_dir: "public".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timezone: "Europe/Zagreb".to_string(),
        }
    }
}
