//! WMO weather code classification.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse condition bucket, used for icon selection and theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunder,
    Unknown,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "clear",
            Condition::Cloudy => "cloudy",
            Condition::Rain => "rain",
            Condition::Snow => "snow",
            Condition::Thunder => "thunder",
            Condition::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconId {
    Sun,
    Cloud,
    Rain,
    Snow,
    Thunder,
    Default,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::Sun => "sun",
            IconId::Cloud => "cloud",
            IconId::Rain => "rain",
            IconId::Snow => "snow",
            IconId::Thunder => "thunder",
            IconId::Default => "default",
        }
    }

    /// Parse an icon name; anything unrecognized is the default icon.
    pub fn from_name(name: &str) -> Self {
        match name {
            "sun" => IconId::Sun,
            "cloud" => IconId::Cloud,
            "rain" => IconId::Rain,
            "snow" => IconId::Snow,
            "thunder" => IconId::Thunder,
            _ => IconId::Default,
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherDetails {
    pub condition: Condition,
    pub description: &'static str,
    pub icon: IconId,
}

/// Details for codes outside the known vocabulary, or a missing code.
pub const UNKNOWN: WeatherDetails = WeatherDetails {
    condition: Condition::Unknown,
    description: "Unknown",
    icon: IconId::Default,
};

/// Map a weather code to its condition, description and icon.
///
/// Codes outside the known vocabulary map to `Unknown` / `"Unknown"` /
/// `Default`.
pub fn classify(code: i32) -> WeatherDetails {
    let (condition, description, icon) = match code {
        0 => (Condition::Clear, "Clear sky", IconId::Sun),
        1..=3 => (Condition::Cloudy, "Partly cloudy", IconId::Cloud),
        45 | 48 => (Condition::Cloudy, "Fog", IconId::Cloud),
        51 | 53 | 55 => (Condition::Rain, "Drizzle", IconId::Rain),
        61 | 63 | 65 => (Condition::Rain, "Rain", IconId::Rain),
        71 | 73 | 75 => (Condition::Snow, "Snow", IconId::Snow),
        80..=82 => (Condition::Rain, "Showers", IconId::Rain),
        95 | 96 | 99 => (Condition::Thunder, "Thunderstorm", IconId::Thunder),
        _ => return UNKNOWN,
    };

    WeatherDetails { condition, description, icon }
}
