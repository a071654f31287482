use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A geocoded place, as resolved from the user's free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
}

/// One day of the daily series. The source leaves a value `None` for days it
/// has no data for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub max_temperature: Option<f64>,
    pub min_temperature: Option<f64>,
}

/// Everything one successful lookup produced.
///
/// `daily` is chronological; the first entry is the day before the
/// location's "today".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub location: Location,
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecastEntry>,
    /// Offset of the location's local time from UTC, as reported by the
    /// forecast source.
    pub utc_offset_seconds: i32,
}
