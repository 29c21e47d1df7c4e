//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap API for current conditions and forecasts

use chrono_tz::Tz;
use reqwest::Client;
use serde::Deserialize;
use shared::format::{capitalize_first, floor_temp, format_clock, mps_to_kmh, round_temp};
use shared::{Coordinates, ForecastEntry, WeatherSnapshot};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
    units: String,
    language: String,
    timezone: Tz,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    weather: Vec<OWMWeather>,
    main: OWMMain,
    wind: OWMWind,
    clouds: OWMClouds,
    dt: i64,
    sys: OWMSys,
    name: String,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OWMClouds {
    all: f64,
}

#[derive(Debug, Deserialize)]
struct OWMSys {
    #[serde(default)]
    country: Option<String>,
    sunrise: i64,
    sunset: i64,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    list: Vec<ForecastEntry>,
}

impl WeatherClient {
    /// Create a new WeatherClient on a shared HTTP client
    pub fn new(client: Client, config: &WeatherConfig, timezone: Tz) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            units: config.units.clone(),
            language: config.language.clone(),
            timezone,
        }
    }

    /// Fetch current weather conditions by coordinates, normalized for display
    pub async fn get_current_weather(&self, coords: Coordinates) -> AppResult<WeatherSnapshot> {
        let data: OWMCurrentResponse = self.get_json("weather", coords).await?;
        convert_current_response(data, self.timezone)
    }

    /// Fetch the 3-hour forecast records by coordinates
    pub async fn get_forecast(&self, coords: Coordinates) -> AppResult<Vec<ForecastEntry>> {
        let data: OWMForecastResponse = self.get_json("forecast", coords).await?;
        Ok(data.list)
    }

    async fn get_json<T>(&self, endpoint: &str, coords: Coordinates) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", self.units.clone()),
                ("lang", self.language.clone()),
            ])
            .send()
            .await
            .map_err(|e| AppError::upstream(endpoint, e))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "{}: status {}",
                endpoint,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::upstream(endpoint, e))
    }
}

/// Convert OpenWeatherMap current response to the display snapshot
fn convert_current_response(data: OWMCurrentResponse, tz: Tz) -> AppResult<WeatherSnapshot> {
    let weather = data
        .weather
        .first()
        .ok_or_else(|| AppError::Upstream("weather: response has no conditions".to_string()))?;

    Ok(WeatherSnapshot {
        description: capitalize_first(&weather.description),
        icon: weather.icon.clone(),
        temp: round_temp(data.main.temp),
        feels_like: round_temp(data.main.feels_like),
        temp_min: floor_temp(data.main.temp_min),
        temp_max: round_temp(data.main.temp_max),
        pressure: round_temp(data.main.pressure),
        humidity: round_temp(data.main.humidity),
        wind_speed: mps_to_kmh(data.wind.speed),
        cloudiness: round_temp(data.clouds.all),
        sunrise: format_clock(data.sys.sunrise, tz),
        sunset: format_clock(data.sys.sunset, tz),
        cur_time: format_clock(data.dt, tz),
        name: data.name,
        country: data.sys.country.unwrap_or_default(),
        lat: None,
        lon: None,
    })
}
