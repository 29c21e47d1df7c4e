//! Weather Map - Backend Server
//!
//! Proxies location and place-name lookups to the upstream weather service,
//! normalizes the responses for display and serves the map front-end.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use services::WeatherService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherService,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let weather = WeatherService::from_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            weather,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Landing page, scripts and the wasm package
    let static_files = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(routes::weather_routes())
        .nest("/tiles", routes::tile_routes())
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
