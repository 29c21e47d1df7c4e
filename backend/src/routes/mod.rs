//! Route definitions for the weather map server

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Weather lookup routes used by the browser
pub fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(handlers::weather_page))
        .route("/location", post(handlers::post_location))
        .route("/search", post(handlers::post_search))
        .route("/forecast", post(handlers::post_forecast))
        .route("/search-forecast", post(handlers::post_search_forecast))
}

/// Map tile proxy routes
pub fn tile_routes() -> Router<AppState> {
    Router::new().route("/temp/:z/:x/:y", get(handlers::get_temperature_tile))
}
