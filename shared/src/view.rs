//! Render model for the map page
//!
//! The browser has two ways to start a lookup (geolocation and the search
//! form). Both end in [`render`], which turns a snapshot and an optional
//! forecast into everything the page paints.

use serde::{Deserialize, Serialize};

use crate::format::{capitalize_first, icon_url, long_date_label, round_temp, short_date_label};
use crate::models::{DayBucket, ForecastByDay, ForecastEntry, WeatherSnapshot};
use crate::types::{ClockTime, Coordinates};

/// Page theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Day,
    Night,
}

/// Day when `sunrise <= now < sunset`, compared as minutes since midnight.
///
/// Any unparsable time yields night.
pub fn theme_for(now: &str, sunrise: &str, sunset: &str) -> Theme {
    let parsed = (
        now.parse::<ClockTime>(),
        sunrise.parse::<ClockTime>(),
        sunset.parse::<ClockTime>(),
    );
    match parsed {
        (Ok(now), Ok(rise), Ok(set)) if rise <= now && now < set => Theme::Day,
        _ => Theme::Night,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoCard {
    pub label: String,
    pub value: i64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentPanel {
    pub place: String,
    pub icon_url: String,
    pub description: String,
    pub temp: i64,
    pub feels_like: i64,
    pub temp_min: i64,
    pub temp_max: i64,
    pub sunrise: String,
    pub sunset: String,
    pub cards: Vec<InfoCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyCard {
    pub date: String,
    pub hour: String,
    pub icon_url: String,
    pub temp: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySummary {
    pub date: String,
    pub short_label: String,
    pub long_label: String,
    pub icon_url: String,
    pub temp: i64,
    pub temp_min: i64,
    pub temp_max: i64,
    pub description: String,
    pub hours: Vec<HourlyCard>,
}

/// Everything the page paints after one lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderModel {
    pub marker: Marker,
    pub theme: Theme,
    pub current: CurrentPanel,
    pub days: Vec<DaySummary>,
    pub hourly: Vec<HourlyCard>,
}

/// Build the render model.
///
/// `location` is where the marker goes; `hour` picks the hourly strip slot
/// (the same rule applies to today and to later days).
pub fn render(
    location: Coordinates,
    snapshot: &WeatherSnapshot,
    forecast: Option<&ForecastByDay>,
    hour: u32,
) -> RenderModel {
    let days = forecast
        .map(|f| f.days().iter().filter_map(day_summary).collect())
        .unwrap_or_default();
    let hourly = forecast
        .map(|f| hourly_strip(f, hour))
        .unwrap_or_default();

    RenderModel {
        marker: Marker {
            latitude: location.latitude,
            longitude: location.longitude,
            label: marker_label(snapshot),
        },
        theme: theme_for(&snapshot.cur_time, &snapshot.sunrise, &snapshot.sunset),
        current: current_panel(snapshot),
        days,
        hourly,
    }
}

fn marker_label(snapshot: &WeatherSnapshot) -> String {
    if snapshot.country.is_empty() {
        snapshot.name.clone()
    } else {
        format!("{}, {}", snapshot.name, snapshot.country)
    }
}

pub fn current_panel(snapshot: &WeatherSnapshot) -> CurrentPanel {
    let card = |label: &str, value: i64, unit: &str| InfoCard {
        label: label.to_string(),
        value,
        unit: unit.to_string(),
    };

    CurrentPanel {
        place: marker_label(snapshot),
        icon_url: icon_url(&snapshot.icon),
        description: snapshot.description.clone(),
        temp: snapshot.temp,
        feels_like: snapshot.feels_like,
        temp_min: snapshot.temp_min,
        temp_max: snapshot.temp_max,
        sunrise: snapshot.sunrise.clone(),
        sunset: snapshot.sunset.clone(),
        cards: vec![
            card("Pressure", snapshot.pressure, "hPa"),
            card("Humidity", snapshot.humidity, "%"),
            card("Cloudiness", snapshot.cloudiness, "%"),
            card("Wind", snapshot.wind_speed, "km/h"),
        ],
    }
}

/// Accordion row for one day, built around its representative entry
pub fn day_summary(day: &DayBucket) -> Option<DaySummary> {
    let rep = day.representative()?;
    let (icon, description) = condition_parts(rep);

    Some(DaySummary {
        date: day.date.format("%Y-%m-%d").to_string(),
        short_label: short_date_label(day.date),
        long_label: long_date_label(day.date),
        icon_url: icon,
        temp: round_temp(rep.main.temp),
        temp_min: day
            .entries
            .iter()
            .map(|e| round_temp(e.main.temp_min))
            .min()
            .unwrap_or_default(),
        temp_max: day
            .entries
            .iter()
            .map(|e| round_temp(e.main.temp_max))
            .max()
            .unwrap_or_default(),
        description,
        hours: day
            .entries
            .iter()
            .filter_map(|e| hourly_card(day, e))
            .collect(),
    })
}

/// One card per day for the entry at `hour`; days without that slot are skipped
pub fn hourly_strip(forecast: &ForecastByDay, hour: u32) -> Vec<HourlyCard> {
    forecast
        .days()
        .iter()
        .filter_map(|day| day.entry_at_hour(hour).and_then(|e| hourly_card(day, e)))
        .collect()
}

fn hourly_card(day: &DayBucket, entry: &ForecastEntry) -> Option<HourlyCard> {
    let hour = entry.hour()?;
    let (icon, description) = condition_parts(entry);
    Some(HourlyCard {
        date: day.date.format("%Y-%m-%d").to_string(),
        hour: format!("{:02}:00", hour),
        icon_url: icon,
        temp: round_temp(entry.main.temp),
        description,
    })
}

fn condition_parts(entry: &ForecastEntry) -> (String, String) {
    match entry.condition() {
        Some(c) => (icon_url(&c.icon), capitalize_first(&c.description)),
        None => (icon_url("01d"), "N/A".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::entry;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            description: "Clear sky".to_string(),
            icon: "01d".to_string(),
            temp: 24,
            feels_like: 25,
            temp_min: 21,
            temp_max: 26,
            pressure: 1015,
            humidity: 48,
            wind_speed: 18,
            cloudiness: 5,
            sunrise: "06:10".to_string(),
            sunset: "19:45".to_string(),
            cur_time: "14:30".to_string(),
            name: "Zagreb".to_string(),
            country: "HR".to_string(),
            lat: None,
            lon: None,
        }
    }

    #[test]
    fn test_theme_uses_minutes_not_strings() {
        assert_eq!(theme_for("14:30", "06:10", "19:45"), Theme::Day);
        assert_eq!(theme_for("05:59", "06:10", "19:45"), Theme::Night);
        assert_eq!(theme_for("19:45", "06:10", "19:45"), Theme::Night);
        // "9:30" would sort after "19:45" as a string
        assert_eq!(theme_for("9:30", "6:10", "19:45"), Theme::Day);
    }

    #[test]
    fn test_theme_for_placeholder_is_night() {
        let s = WeatherSnapshot::placeholder();
        assert_eq!(theme_for(&s.cur_time, &s.sunrise, &s.sunset), Theme::Night);
        assert_eq!(theme_for("garbage", "06:00", "20:00"), Theme::Night);
    }

    #[test]
    fn test_render_without_forecast() {
        let model = render(Coordinates::new(45.8, 16.0), &snapshot(), None, 12);
        assert_eq!(model.marker.label, "Zagreb, HR");
        assert_eq!(model.theme, Theme::Day);
        assert_eq!(model.current.cards.len(), 4);
        assert_eq!(model.current.cards[3].value, 18);
        assert_eq!(model.current.cards[3].unit, "km/h");
        assert!(model.days.is_empty());
        assert!(model.hourly.is_empty());
    }

    #[test]
    fn test_render_days_use_representative_entry() {
        let forecast = ForecastByDay::from_entries(vec![
            entry("2025-08-28 15:00:00", 27.4, "03d"),
            entry("2025-08-28 18:00:00", 24.0, "04d"),
            entry("2025-08-29 09:00:00", 18.0, "01d"),
            entry("2025-08-29 12:00:00", 22.5, "02d"),
        ]);

        let model = render(Coordinates::new(45.8, 16.0), &snapshot(), Some(&forecast), 12);
        assert_eq!(model.days.len(), 2);

        // No midday slot on the 28th: first entry stands in
        assert_eq!(model.days[0].temp, 27);
        assert!(model.days[0].icon_url.contains("03d"));
        assert_eq!(model.days[0].description, "Clear sky");
        assert_eq!(model.days[0].short_label, "Thu 28.08.");
        assert_eq!(model.days[0].hours.len(), 2);

        assert_eq!(model.days[1].temp, 23);
        assert!(model.days[1].icon_url.contains("02d"));
        assert_eq!(model.days[1].temp_min, 17);
        assert_eq!(model.days[1].temp_max, 24);
    }

    #[test]
    fn test_hourly_strip_matches_hour_on_every_day() {
        let forecast = ForecastByDay::from_entries(vec![
            entry("2025-08-28 15:00:00", 27.0, "03d"),
            entry("2025-08-29 12:00:00", 22.0, "02d"),
            entry("2025-08-29 15:00:00", 25.0, "02d"),
        ]);

        let strip = hourly_strip(&forecast, 15);
        assert_eq!(strip.len(), 2);
        assert_eq!(strip[0].date, "2025-08-28");
        assert_eq!(strip[1].date, "2025-08-29");
        assert!(strip.iter().all(|c| c.hour == "15:00"));

        assert!(hourly_strip(&forecast, 6).is_empty());
    }
}
