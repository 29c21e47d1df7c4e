//! Current-conditions display model

use serde::{Deserialize, Serialize};

/// Place name used by the placeholder snapshot
pub const DEFAULT_PLACE_NAME: &str = "Unknown location";

/// Normalized current conditions as shown on the page.
///
/// Always fully populated: when live data cannot be obtained the
/// [`WeatherSnapshot::placeholder`] value is used instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub description: String,
    pub icon: String,
    pub temp: i64,
    pub feels_like: i64,
    pub temp_min: i64,
    pub temp_max: i64,
    /// hPa
    pub pressure: i64,
    /// %
    pub humidity: i64,
    /// km/h
    pub wind_speed: i64,
    /// %
    pub cloudiness: i64,
    pub sunrise: String,
    pub sunset: String,
    #[serde(rename = "curTime")]
    pub cur_time: String,
    pub name: String,
    pub country: String,
    /// Only set for place-search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl WeatherSnapshot {
    /// Fixed placeholder record used whenever upstream data is unavailable
    pub fn placeholder() -> Self {
        Self {
            description: "N/A".to_string(),
            icon: "01d".to_string(),
            temp: 0,
            feels_like: 0,
            temp_min: 0,
            temp_max: 0,
            pressure: 0,
            humidity: 0,
            wind_speed: 0,
            cloudiness: 0,
            sunrise: "00:00".to_string(),
            sunset: "00:00".to_string(),
            cur_time: "00:00".to_string(),
            name: DEFAULT_PLACE_NAME.to_string(),
            country: "NN".to_string(),
            lat: None,
            lon: None,
        }
    }

    /// Whether this is the untouched placeholder record
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }

    /// Attach the coordinates a place search resolved to
    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.lat = Some(latitude);
        self.lon = Some(longitude);
        self
    }
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self::placeholder()
    }
}
