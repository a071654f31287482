//! Turns a [`WeatherResult`] into display-ready values.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    classify::{Condition, UNKNOWN, classify},
    day_label::day_label,
    icon::{IconSize, render_icon},
    model::WeatherResult,
};

/// One entry of the forecast strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastItem {
    pub day: String,
    pub condition: Condition,
    pub icon_svg: String,
    pub max: String,
    pub min: String,
}

/// The contents of the weather region of the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub city_name: String,
    pub country_name: String,
    pub temperature: String,
    pub wind_speed: String,
    pub description: String,
    pub icon_svg: String,
    /// Theme for the surrounding container; the current condition category.
    pub theme: Condition,
    pub forecast: Vec<ForecastItem>,
}

/// Shown for a daily value the source had no data for.
pub const MISSING: &str = "-";

/// Shortest decimal form of `value`, with negative zero shown as `0`.
fn format_value(value: f64) -> String {
    if value == 0.0 { "0".to_string() } else { value.to_string() }
}

/// Render `result`, labelling forecast days relative to `today`.
///
/// Numbers are shown exactly as the source supplied them.
pub fn render(result: &WeatherResult, today: NaiveDate) -> WeatherView {
    let current = classify(result.current.weather_code);

    let forecast = result
        .daily
        .iter()
        .map(|entry| {
            let details = entry.weather_code.map_or(UNKNOWN, classify);
            ForecastItem {
                day: day_label(entry.date, today),
                condition: details.condition,
                icon_svg: render_icon(details.icon, IconSize::Compact),
                max: entry.max_temperature.map_or_else(|| MISSING.to_string(), format_value),
                min: entry.min_temperature.map_or_else(|| MISSING.to_string(), format_value),
            }
        })
        .collect();

    WeatherView {
        city_name: result.location.name.clone(),
        country_name: result.location.country.clone().unwrap_or_default(),
        temperature: format_value(result.current.temperature),
        wind_speed: format_value(result.current.wind_speed),
        description: current.description.to_string(),
        icon_svg: render_icon(current.icon, IconSize::Normal),
        theme: current.condition,
        forecast,
    }
}
