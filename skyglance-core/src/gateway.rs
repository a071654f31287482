use crate::{Config, WeatherResult, gateway::open_meteo::OpenMeteoGateway};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch weather data.";

/// Why a lookup produced no weather.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The geocoder returned no candidates for the query.
    #[error("City not found.")]
    CityNotFound,

    /// Network, HTTP status or payload failure at either step.
    #[error("{0}")]
    Transport(String),
}

impl GatewayError {
    /// The text presented to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Transport(msg) if msg.trim().is_empty() => {
                FALLBACK_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Resolves a city name into current and daily weather.
#[async_trait]
pub trait WeatherGateway: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<WeatherResult, GatewayError>;
}

/// Construct the gateway described by `config`.
pub fn gateway_from_config(config: &Config) -> Box<dyn WeatherGateway> {
    Box::new(OpenMeteoGateway::new(config))
}
