use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    Config,
    model::{CurrentConditions, DailyForecastEntry, Location, WeatherResult},
};

use super::{GatewayError, WeatherGateway};

const DAILY_FIELDS: &str = "weathercode,temperature_2m_max,temperature_2m_min";
const PAST_DAYS: &str = "1";
const FORECAST_DAYS: &str = "6";

/// Open-Meteo geocoding + forecast, no API key required.
#[derive(Debug, Clone)]
pub struct OpenMeteoGateway {
    geocoding_url: String,
    forecast_url: String,
    http: Client,
}

impl OpenMeteoGateway {
    pub fn new(config: &Config) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &Config, http: Client) -> Self {
        Self {
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
            http,
        }
    }

    /// First geocoding candidate for `city`, or `None` if there are no matches.
    async fn geocode(&self, city: &str) -> Result<Option<Location>> {
        tracing::debug!(city, "geocoding");

        // `query` percent-encodes the free-text name.
        let req = self.http.get(&self.geocoding_url).query(&[
            ("name", city),
            ("count", "1"),
            ("language", "en"),
            ("format", "json"),
        ]);

        let parsed: OmGeocodeResponse = get_json(req, "geocoding").await?;

        let place = match parsed.results.and_then(|r| r.into_iter().next()) {
            Some(place) => place,
            None => return Ok(None),
        };

        Ok(Some(Location {
            name: place.name,
            country: place.country,
            latitude: place.latitude,
            longitude: place.longitude,
        }))
    }

    async fn forecast(&self, location: Location) -> Result<WeatherResult> {
        tracing::debug!(
            latitude = location.latitude,
            longitude = location.longitude,
            "requesting forecast"
        );

        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();

        let req = self.http.get(&self.forecast_url).query(&[
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("current_weather", "true"),
            ("daily", DAILY_FIELDS),
            ("timezone", "auto"),
            ("past_days", PAST_DAYS),
            ("forecast_days", FORECAST_DAYS),
        ]);

        let parsed: OmForecastResponse = get_json(req, "forecast").await?;
        let daily = parsed.daily.into_entries()?;

        Ok(WeatherResult {
            location,
            current: CurrentConditions {
                temperature: parsed.current_weather.temperature,
                wind_speed: parsed.current_weather.windspeed,
                weather_code: parsed.current_weather.weathercode,
            },
            daily,
            utc_offset_seconds: parsed.utc_offset_seconds,
        })
    }
}

#[async_trait]
impl WeatherGateway for OpenMeteoGateway {
    async fn fetch(&self, city: &str) -> Result<WeatherResult, GatewayError> {
        let location = self
            .geocode(city)
            .await
            .map_err(transport)?
            .ok_or(GatewayError::CityNotFound)?;

        self.forecast(location).await.map_err(transport)
    }
}

fn transport(err: anyhow::Error) -> GatewayError {
    GatewayError::Transport(format!("{err:#}"))
}

async fn get_json<T: DeserializeOwned>(req: reqwest::RequestBuilder, what: &str) -> Result<T> {
    let res = req
        .send()
        .await
        .with_context(|| format!("Failed to send {what} request"))?;

    let status = res.status();
    let body = res
        .text()
        .await
        .with_context(|| format!("Failed to read {what} response body"))?;

    if !status.is_success() {
        return Err(anyhow!(
            "{what} request failed with status {}: {}",
            status,
            truncate_body(&body),
        ));
    }

    serde_json::from_str(&body).with_context(|| format!("Failed to parse {what} JSON"))
}

#[derive(Debug, Deserialize)]
struct OmPlace {
    name: String,
    #[serde(default)]
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct OmGeocodeResponse {
    // Open-Meteo omits `results` entirely when nothing matches.
    #[serde(default)]
    results: Option<Vec<OmPlace>>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

#[derive(Debug, Deserialize)]
struct OmDaily {
    time: Vec<NaiveDate>,
    weathercode: Vec<Option<i32>>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
}

impl OmDaily {
    fn into_entries(self) -> Result<Vec<DailyForecastEntry>> {
        let n = self.time.len();
        if self.weathercode.len() != n
            || self.temperature_2m_max.len() != n
            || self.temperature_2m_min.len() != n
        {
            return Err(anyhow!(
                "Malformed forecast payload: daily series lengths differ \
                 (time={}, weathercode={}, max={}, min={})",
                n,
                self.weathercode.len(),
                self.temperature_2m_max.len(),
                self.temperature_2m_min.len(),
            ));
        }

        let entries = self
            .time
            .into_iter()
            .zip(self.weathercode)
            .zip(self.temperature_2m_max.into_iter().zip(self.temperature_2m_min))
            .map(|((date, weather_code), (max_temperature, min_temperature))| {
                DailyForecastEntry { date, weather_code, max_temperature, min_temperature }
            })
            .collect();

        Ok(entries)
    }
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    #[serde(default)]
    utc_offset_seconds: i32,
    current_weather: OmCurrentWeather,
    daily: OmDaily,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_series_are_zipped_in_order() {
        let daily: OmDaily = serde_json::from_value(serde_json::json!({
            "time": ["2024-03-09", "2024-03-10", "2024-03-11"],
            "weathercode": [0, 61, 95],
            "temperature_2m_max": [10.5, 8.0, 12.1],
            "temperature_2m_min": [1.0, -2.3, 4.4],
        }))
        .expect("valid daily payload");

        let entries = daily.into_entries().expect("aligned series");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 3, 9).expect("date"));
        assert_eq!(entries[1].weather_code, Some(61));
        assert_eq!(entries[1].min_temperature, Some(-2.3));
        assert_eq!(entries[2].max_temperature, Some(12.1));
    }

    #[test]
    fn null_daily_values_are_kept_as_missing() {
        let daily: OmDaily = serde_json::from_value(serde_json::json!({
            "time": ["2024-03-09", "2024-03-10"],
            "weathercode": [null, 3],
            "temperature_2m_max": [null, 8.0],
            "temperature_2m_min": [1.5, null],
        }))
        .expect("nulls are accepted");

        let entries = daily.into_entries().expect("aligned series");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].weather_code, None);
        assert_eq!(entries[0].max_temperature, None);
        assert_eq!(entries[0].min_temperature, Some(1.5));
        assert_eq!(entries[1].weather_code, Some(3));
        assert_eq!(entries[1].min_temperature, None);
    }

    #[test]
    fn misaligned_daily_series_is_rejected() {
        let daily = OmDaily {
            time: vec![NaiveDate::from_ymd_opt(2024, 3, 9).expect("date")],
            weathercode: vec![],
            temperature_2m_max: vec![Some(1.0)],
            temperature_2m_min: vec![Some(0.0)],
        };

        let err = daily.into_entries().unwrap_err();
        assert!(err.to_string().contains("lengths differ"));
    }

    #[test]
    fn geocode_without_results_field_parses() {
        let parsed: OmGeocodeResponse =
            serde_json::from_str(r#"{"generationtime_ms":0.5}"#).expect("parse");
        assert!(parsed.results.is_none());
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "ü".repeat(300);
        let out = truncate_body(&long);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn transport_keeps_context_chain() {
        let err = anyhow!("connection reset").context("Failed to send geocoding request");
        assert_eq!(
            transport(err),
            GatewayError::Transport("Failed to send geocoding request: connection reset".into())
        );
    }
}
