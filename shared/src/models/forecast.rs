//! Forecast records and day bucketing
//!
//! The upstream forecast is a flat list of 3-hour records spanning several
//! days. [`ForecastByDay`] groups them by calendar date and keeps only the
//! daytime window.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// First hour of the daytime window (inclusive)
pub const DAYTIME_START_HOUR: u32 = 9;

/// Last hour of the daytime window (inclusive)
pub const DAYTIME_END_HOUR: u32 = 21;

/// Hour whose entry represents the whole day
pub const MIDDAY_HOUR: u32 = 12;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One raw 3-hour forecast record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastEntry {
    pub dt: i64,
    pub main: ForecastMain,
    #[serde(default)]
    pub weather: Vec<ForecastCondition>,
    #[serde(default)]
    pub clouds: ForecastClouds,
    #[serde(default)]
    pub wind: ForecastWind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<i64>,
    /// Probability of precipitation (0-1)
    #[serde(default)]
    pub pop: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<ForecastRain>,
    /// `YYYY-MM-DD HH:MM:SS`
    pub dt_txt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub pressure: i64,
    pub humidity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastCondition {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub main: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastClouds {
    pub all: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastWind {
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deg: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gust: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRain {
    #[serde(rename = "3h", default)]
    pub three_hour: f64,
}

impl ForecastEntry {
    /// Wall-clock time parsed from `dt_txt`
    pub fn local_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.dt_txt, TIMESTAMP_FORMAT).ok()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.local_time().map(|t| t.date())
    }

    pub fn hour(&self) -> Option<u32> {
        self.local_time().map(|t| t.hour())
    }

    /// Whether the entry falls inside the daytime window
    pub fn is_daytime(&self) -> bool {
        self.hour()
            .is_some_and(|h| (DAYTIME_START_HOUR..=DAYTIME_END_HOUR).contains(&h))
    }

    /// Primary weather condition, if the upstream sent one
    pub fn condition(&self) -> Option<&ForecastCondition> {
        self.weather.first()
    }
}

/// Forecast entries of a single calendar day, in upstream order
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub entries: Vec<ForecastEntry>,
}

impl DayBucket {
    /// Entry whose hour of day matches `hour`
    pub fn entry_at_hour(&self, hour: u32) -> Option<&ForecastEntry> {
        self.entries.iter().find(|e| e.hour() == Some(hour))
    }

    /// The 12:00 entry, or the first entry of the day when there is none
    pub fn representative(&self) -> Option<&ForecastEntry> {
        self.entry_at_hour(MIDDAY_HOUR)
            .or_else(|| self.entries.first())
    }
}

/// Forecast entries grouped by calendar day.
///
/// Day order follows the first occurrence in the upstream sequence and
/// serializes as a JSON object keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastByDay {
    days: Vec<DayBucket>,
}

impl ForecastByDay {
    /// Group entries by date, dropping those outside the daytime window.
    ///
    /// Entries with an unparsable `dt_txt` are skipped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ForecastEntry>,
    {
        let mut days: Vec<DayBucket> = Vec::new();

        for entry in entries {
            let Some(time) = entry.local_time() else {
                continue;
            };
            if !(DAYTIME_START_HOUR..=DAYTIME_END_HOUR).contains(&time.hour()) {
                continue;
            }

            let date = time.date();
            match days.iter_mut().find(|d| d.date == date) {
                Some(bucket) => bucket.entries.push(entry),
                None => days.push(DayBucket {
                    date,
                    entries: vec![entry],
                }),
            }
        }

        Self { days }
    }

    pub fn days(&self) -> &[DayBucket] {
        &self.days
    }

    /// Look up a day by its `YYYY-MM-DD` key
    pub fn get(&self, key: &str) -> Option<&DayBucket> {
        let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
        self.days.iter().find(|d| d.date == date)
    }

    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.days.iter().map(|d| d.date.format("%Y-%m-%d").to_string())
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Serialize for ForecastByDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.date.format("%Y-%m-%d").to_string(), &day.entries)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ForecastByDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DaysVisitor;

        impl<'de> Visitor<'de> for DaysVisitor {
            type Value = ForecastByDay;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of YYYY-MM-DD keys to forecast entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut days = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, entries)) =
                    access.next_entry::<String, Vec<ForecastEntry>>()?
                {
                    let date = NaiveDate::parse_from_str(&key, "%Y-%m-%d")
                        .map_err(serde::de::Error::custom)?;
                    days.push(DayBucket { date, entries });
                }
                Ok(ForecastByDay { days })
            }
        }

        deserializer.deserialize_map(DaysVisitor)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::entry;
    use super::*;

    #[test]
    fn test_daytime_window_is_inclusive() {
        let forecast = ForecastByDay::from_entries(vec![
            entry("2025-08-28 08:00:00", 15.0, "01n"),
            entry("2025-08-28 09:00:00", 18.0, "01d"),
            entry("2025-08-28 21:00:00", 20.0, "01n"),
            entry("2025-08-28 22:00:00", 17.0, "01n"),
        ]);

        let day = forecast.get("2025-08-28").unwrap();
        let times: Vec<&str> = day.entries.iter().map(|e| e.dt_txt.as_str()).collect();
        assert_eq!(times, vec!["2025-08-28 09:00:00", "2025-08-28 21:00:00"]);
    }

    #[test]
    fn test_entries_grouped_per_day() {
        let forecast = ForecastByDay::from_entries(vec![
            entry("2025-08-28 12:00:00", 25.0, "01d"),
            entry("2025-08-29 12:00:00", 23.0, "02d"),
        ]);

        assert_eq!(forecast.len(), 2);
        let keys: Vec<String> = forecast.keys().collect();
        assert_eq!(keys, vec!["2025-08-28", "2025-08-29"]);
    }

    #[test]
    fn test_day_dropped_when_only_night_entries() {
        let forecast = ForecastByDay::from_entries(vec![
            entry("2025-08-28 00:00:00", 12.0, "01n"),
            entry("2025-08-28 03:00:00", 11.0, "01n"),
            entry("2025-08-28 06:00:00", 13.0, "01d"),
        ]);
        assert!(forecast.is_empty());
    }

    #[test]
    fn test_unparsable_timestamp_skipped() {
        let forecast = ForecastByDay::from_entries(vec![
            entry("tomorrow noon", 12.0, "01d"),
            entry("2025-08-28 12:00:00", 20.0, "01d"),
        ]);
        assert_eq!(forecast.days()[0].entries.len(), 1);
    }

    #[test]
    fn test_representative_prefers_midday() {
        let forecast = ForecastByDay::from_entries(vec![
            entry("2025-08-28 09:00:00", 18.0, "01d"),
            entry("2025-08-28 12:00:00", 25.0, "02d"),
            entry("2025-08-28 15:00:00", 27.0, "03d"),
        ]);
        let day = &forecast.days()[0];
        assert_eq!(day.representative().unwrap().dt_txt, "2025-08-28 12:00:00");
    }

    #[test]
    fn test_representative_falls_back_to_first_entry() {
        let forecast = ForecastByDay::from_entries(vec![
            entry("2025-08-28 15:00:00", 27.0, "03d"),
            entry("2025-08-28 18:00:00", 24.0, "04d"),
        ]);
        let day = &forecast.days()[0];
        assert_eq!(day.representative().unwrap().dt_txt, "2025-08-28 15:00:00");
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let forecast = ForecastByDay::from_entries(vec![
            entry("2025-08-29 12:00:00", 23.0, "02d"),
            entry("2025-08-28 12:00:00", 25.0, "01d"),
        ]);

        let json = serde_json::to_string(&forecast).unwrap();
        // First occurrence wins, not lexical order
        let first = json.find("2025-08-29").unwrap();
        let second = json.find("2025-08-28").unwrap();
        assert!(first < second);

        let back: ForecastByDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, forecast);
    }

    #[test]
    fn test_parses_upstream_record() {
        let raw = serde_json::json!({
            "dt": 1756382400,
            "main": {
                "temp": 24.3, "feels_like": 24.1, "temp_min": 23.0, "temp_max": 24.3,
                "pressure": 1014, "sea_level": 1014, "grnd_level": 990,
                "humidity": 55, "temp_kf": 1.3
            },
            "weather": [{"id": 500, "main": "Rain", "description": "slaba kiša", "icon": "10d"}],
            "clouds": {"all": 75},
            "wind": {"speed": 3.1, "deg": 200, "gust": 5.2},
            "visibility": 10000,
            "pop": 0.4,
            "rain": {"3h": 0.6},
            "sys": {"pod": "d"},
            "dt_txt": "2025-08-28 12:00:00"
        });

        let entry: ForecastEntry = serde_json::from_value(raw).unwrap();
        assert_eq!(entry.hour(), Some(12));
        assert_eq!(entry.condition().unwrap().icon, "10d");
        assert_eq!(entry.rain.as_ref().unwrap().three_hour, 0.6);
    }
}
