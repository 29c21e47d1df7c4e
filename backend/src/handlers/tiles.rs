//! Temperature tile proxy handler

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use shared::{parse_png_segment, validate_tile_coord, TileCoord};
use tracing::instrument;

use crate::AppState;

/// Forward `/tiles/temp/{z}/{x}/{y}.png` to the tile service and stream the image back
#[instrument(skip(state))]
pub async fn get_temperature_tile(
    State(state): State<AppState>,
    Path((z, x, y_png)): Path<(u32, u32, String)>,
) -> Response {
    let tile = match parse_png_segment(&y_png).map(|y| TileCoord::new(z, x, y)) {
        Ok(tile) => tile,
        Err(msg) => return (StatusCode::BAD_REQUEST, msg).into_response(),
    };
    if let Err(msg) = validate_tile_coord(&tile) {
        return (StatusCode::BAD_REQUEST, msg).into_response();
    }

    match state.weather.tile(tile).await {
        Ok(upstream) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "image/png")
            .header(header::CACHE_CONTROL, "public, max-age=600")
            .body(Body::from_stream(upstream.bytes_stream()))
            .unwrap_or_else(|_| tile_error()),
        Err(e) => {
            tracing::error!("Error fetching tile: {}", e);
            tile_error()
        }
    }
}

fn tile_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching tile").into_response()
}
