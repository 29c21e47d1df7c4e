//! Validation utilities for request input
//!
//! Everything arriving from the browser is untrusted: coordinates, place
//! names and tile addresses are checked here before any upstream call.

use validator::Validate;

use crate::types::{Coordinates, TileCoord};

/// Longest place name forwarded to the geocoder
pub const MAX_PLACE_NAME_LEN: usize = 200;

/// Deepest zoom level the tile proxy forwards
pub const MAX_TILE_ZOOM: u32 = 22;

// ============================================================================
// Location Validations
// ============================================================================

/// Validate latitude/longitude are finite and within range
pub fn validate_coordinates(coords: &Coordinates) -> Result<(), &'static str> {
    if !coords.latitude.is_finite() || !coords.longitude.is_finite() {
        return Err("Coordinates must be finite numbers");
    }
    coords
        .validate()
        .map_err(|_| "Latitude must be within [-90, 90] and longitude within [-180, 180]")
}

/// Validate a free-text place name and return the trimmed value
pub fn validate_place_name(place: &str) -> Result<&str, &'static str> {
    let trimmed = place.trim();
    if trimmed.is_empty() {
        return Err("Place name must not be empty");
    }
    if trimmed.chars().count() > MAX_PLACE_NAME_LEN {
        return Err("Place name must be at most 200 characters");
    }
    if trimmed.chars().any(char::is_control) {
        return Err("Place name must not contain control characters");
    }
    Ok(trimmed)
}

// ============================================================================
// Map Tile Validations
// ============================================================================

/// Validate a tile address against the web-mercator grid
pub fn validate_tile_coord(tile: &TileCoord) -> Result<(), &'static str> {
    if tile.z > MAX_TILE_ZOOM {
        return Err("Zoom level out of range");
    }
    let size = 1u64 << tile.z;
    if u64::from(tile.x) >= size || u64::from(tile.y) >= size {
        return Err("Tile column/row out of range for zoom level");
    }
    Ok(())
}

/// Parse the `{y}.png` path segment of a tile request
pub fn parse_png_segment(segment: &str) -> Result<u32, &'static str> {
    let stem = segment
        .strip_suffix(".png")
        .ok_or("Tile path must end in .png")?;
    stem.parse().map_err(|_| "Tile row must be a non-negative integer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coordinates() {
        assert!(validate_coordinates(&Coordinates::new(45.8, 16.0)).is_ok());
        assert!(validate_coordinates(&Coordinates::new(-90.0, 180.0)).is_ok());
        assert!(validate_coordinates(&Coordinates::new(90.5, 16.0)).is_err());
        assert!(validate_coordinates(&Coordinates::new(45.8, 200.0)).is_err());
        assert!(validate_coordinates(&Coordinates::new(f64::NAN, 16.0)).is_err());
        assert!(validate_coordinates(&Coordinates::new(45.8, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validate_place_name() {
        assert_eq!(validate_place_name("  Split "), Ok("Split"));
        assert_eq!(validate_place_name("Slavonski Brod"), Ok("Slavonski Brod"));
        assert!(validate_place_name("").is_err());
        assert!(validate_place_name("   ").is_err());
        assert!(validate_place_name("Zag\nreb").is_err());
        assert!(validate_place_name(&"a".repeat(201)).is_err());
        assert!(validate_place_name(&"ž".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_tile_coord() {
        assert!(validate_tile_coord(&TileCoord::new(0, 0, 0)).is_ok());
        assert!(validate_tile_coord(&TileCoord::new(6, 34, 22)).is_ok());
        assert!(validate_tile_coord(&TileCoord::new(1, 2, 0)).is_err());
        assert!(validate_tile_coord(&TileCoord::new(23, 0, 0)).is_err());
    }

    #[test]
    fn test_parse_png_segment() {
        assert_eq!(parse_png_segment("22.png"), Ok(22));
        assert!(parse_png_segment("22").is_err());
        assert!(parse_png_segment("-1.png").is_err());
        assert!(parse_png_segment("abc.png").is_err());
    }
}
