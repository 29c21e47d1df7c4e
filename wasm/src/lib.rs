//! WebAssembly module for the weather map front-end
//!
//! Provides client-side computation for:
//! - The render model painted after every lookup
//! - Day/night theme selection
//! - Forecast day summaries

use shared::view::{self, Theme};
use shared::{Coordinates, ForecastByDay, WeatherSnapshot, DEFAULT_LOCATION};
use wasm_bindgen::prelude::*;

/// Latitude of the fallback map location
#[wasm_bindgen]
pub fn default_latitude() -> f64 {
    DEFAULT_LOCATION.latitude
}

/// Longitude of the fallback map location
#[wasm_bindgen]
pub fn default_longitude() -> f64 {
    DEFAULT_LOCATION.longitude
}

/// Build the render model for a lookup.
///
/// `forecast_json` may be omitted (or `null`) when the forecast request
/// failed; the model then carries no day or hourly entries.
#[wasm_bindgen]
pub fn render_view(
    latitude: f64,
    longitude: f64,
    snapshot_json: &str,
    forecast_json: Option<String>,
    hour: u32,
) -> Result<String, JsValue> {
    let snapshot: WeatherSnapshot = serde_json::from_str(snapshot_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid snapshot JSON: {}", e)))?;

    let forecast = match forecast_json.as_deref() {
        None | Some("null") => None,
        Some(json) => match serde_json::from_str::<ForecastByDay>(json) {
            Ok(f) => Some(f),
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "Ignoring invalid forecast JSON: {}",
                    e
                )));
                None
            }
        },
    };

    let model = view::render(
        Coordinates::new(latitude, longitude),
        &snapshot,
        forecast.as_ref(),
        hour,
    );
    serde_json::to_string(&model).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Page theme for the given `HH:MM` strings: "day" or "night"
#[wasm_bindgen]
pub fn theme_for(now: &str, sunrise: &str, sunset: &str) -> String {
    match view::theme_for(now, sunrise, sunset) {
        Theme::Day => "day".to_string(),
        Theme::Night => "night".to_string(),
    }
}

/// Whether a snapshot is the placeholder returned when no data was found
#[wasm_bindgen]
pub fn is_placeholder(snapshot_json: &str) -> bool {
    serde_json::from_str::<WeatherSnapshot>(snapshot_json)
        .map(|s| s.is_placeholder())
        .unwrap_or(true)
}
