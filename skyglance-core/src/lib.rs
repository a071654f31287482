//! Core library for the `skyglance` weather lookup.
//!
//! This crate defines:
//! - Weather code classification, icons and day labels
//! - The Open-Meteo gateway (geocode, then forecast)
//! - Persistence of the last searched city
//! - The view controller and the renderer that feeds it
//!
//! It is used by `skyglance-cli`, but can also be reused by other front ends.

pub mod classify;
pub mod config;
pub mod controller;
pub mod day_label;
pub mod gateway;
pub mod icon;
pub mod model;
pub mod page;
pub mod render;
pub mod store;

pub use classify::{Condition, IconId, WeatherDetails, classify};
pub use config::Config;
pub use controller::{Phase, Screen, Submission, ViewController};
pub use gateway::{GatewayError, WeatherGateway, gateway_from_config, open_meteo::OpenMeteoGateway};
pub use model::{CurrentConditions, DailyForecastEntry, Location, WeatherResult};
pub use render::{ForecastItem, WeatherView, render};
pub use store::{CityStore, FileCityStore, MemoryCityStore};
