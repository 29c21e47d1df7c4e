//! Common types used across the application

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Geographic coordinates in floating point degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Validate)]
pub struct Coordinates {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Default map center used when the browser cannot provide a location (Zagreb)
pub const DEFAULT_LOCATION: Coordinates = Coordinates {
    latitude: 45.815,
    longitude: 15.978,
};

/// A place matched by the geocoding lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedPlace {
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
}

/// Map tile address (zoom / column / row)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TileCoord {
    pub z: u32,
    pub x: u32,
    pub y: u32,
}

impl TileCoord {
    pub fn new(z: u32, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }
}

/// Wall-clock time of day stored as minutes since midnight.
///
/// Parsed from and rendered as zero-padded `HH:MM`, so ordering never depends
/// on string formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.0 / 60)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.0 % 60)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid clock time: {0:?}")]
pub struct ParseClockTimeError(pub String);

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseClockTimeError(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
        let hour: u32 = h.parse().map_err(|_| err())?;
        let minute: u32 = m.parse().map_err(|_| err())?;
        Self::from_hm(hour, minute).ok_or_else(err)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_parse_and_display() {
        let t: ClockTime = "06:05".parse().unwrap();
        assert_eq!(t.minutes_since_midnight(), 365);
        assert_eq!(t.to_string(), "06:05");

        // Unpadded input still orders numerically
        let early: ClockTime = "6:05".parse().unwrap();
        let late: ClockTime = "10:00".parse().unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_clock_time_rejects_garbage() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("12:60".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
    }

    #[test]
    fn test_coordinates_range_validation() {
        assert!(Coordinates::new(45.8, 16.0).validate().is_ok());
        assert!(Coordinates::new(91.0, 16.0).validate().is_err());
        assert!(Coordinates::new(45.8, -181.0).validate().is_err());
    }
}
