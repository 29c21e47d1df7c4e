//! HTTP request handlers

pub mod health;
pub mod pages;
pub mod tiles;
pub mod weather;

pub use health::health_check;
pub use pages::weather_page;
pub use tiles::get_temperature_tile;
pub use weather::{post_forecast, post_location, post_search, post_search_forecast};
