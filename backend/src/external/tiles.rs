//! Map tile client for the temperature overlay

use reqwest::{Client, Response};
use shared::TileCoord;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Tile API client
#[derive(Clone)]
pub struct TileClient {
    client: Client,
    api_key: String,
    base_url: String,
    layer: String,
}

impl TileClient {
    pub fn new(client: Client, config: &WeatherConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.tile_base_url.trim_end_matches('/').to_string(),
            layer: config.tile_layer.clone(),
        }
    }

    /// Request a tile image; the body is left unread so it can be streamed
    pub async fn fetch(&self, tile: TileCoord) -> AppResult<Response> {
        let url = format!(
            "{}/{}/{}/{}/{}.png",
            self.base_url, self.layer, tile.z, tile.x, tile.y
        );

        let response = self
            .client
            .get(&url)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::upstream("tile", e))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "tile {}/{}/{}: status {}",
                tile.z,
                tile.x,
                tile.y,
                response.status()
            )));
        }

        Ok(response)
    }
}
