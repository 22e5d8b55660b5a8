//! Core library for the terminal weather browser.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The HTTP client for the upstream weather service
//! - Shared domain models (queries, readings) and error types
//!
//! It is used by `weather-tui`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{FetchWeather, OpenWeatherClient};
pub use config::Config;
pub use error::FetchError;
pub use model::{CityQuery, WeatherReading};
