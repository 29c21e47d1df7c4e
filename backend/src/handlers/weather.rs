//! HTTP handlers for weather lookup endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use shared::{validate_coordinates, validate_place_name, Coordinates, ForecastByDay, WeatherSnapshot};

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Coordinates sent by the browser
#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LocationRequest {
    pub fn into_coordinates(self) -> AppResult<Coordinates> {
        let latitude = self
            .latitude
            .ok_or_else(|| AppError::validation("latitude", "latitude is required"))?;
        let longitude = self
            .longitude
            .ok_or_else(|| AppError::validation("longitude", "longitude is required"))?;

        let coords = Coordinates::new(latitude, longitude);
        validate_coordinates(&coords).map_err(|msg| AppError::validation("coordinates", msg))?;
        Ok(coords)
    }
}

/// Place name typed into the search form
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub place: Option<String>,
}

impl SearchRequest {
    pub fn place(&self) -> AppResult<&str> {
        let place = self
            .place
            .as_deref()
            .ok_or_else(|| AppError::validation("place", "place is required"))?;
        validate_place_name(place).map_err(|msg| AppError::validation("place", msg))
    }
}

/// Current weather for the browser's location
pub async fn post_location(
    State(state): State<AppState>,
    payload: Result<Json<LocationRequest>, JsonRejection>,
) -> AppResult<Json<WeatherSnapshot>> {
    let Json(input) = payload?;
    let coords = input.into_coordinates()?;
    let snapshot = state.weather.current_or_default(coords).await;
    Ok(Json(snapshot))
}

/// Current weather for a place name
pub async fn post_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<WeatherSnapshot>> {
    let Json(input) = payload?;
    let place = input.place()?;
    let snapshot = state.weather.search(place).await;
    Ok(Json(snapshot))
}

/// Forecast grouped by day for the browser's location
pub async fn post_forecast(
    State(state): State<AppState>,
    payload: Result<Json<LocationRequest>, JsonRejection>,
) -> AppResult<Json<ForecastByDay>> {
    let Json(input) = payload?;
    let coords = input.into_coordinates()?;
    let forecast = state.weather.forecast(coords).await?;
    Ok(Json(forecast))
}

/// Forecast grouped by day for a place name
pub async fn post_search_forecast(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<ForecastByDay>> {
    let Json(input) = payload?;
    let place = input.place()?;
    let forecast = state.weather.search_forecast(place).await?;
    Ok(Json(forecast))
}
