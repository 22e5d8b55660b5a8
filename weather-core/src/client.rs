//! HTTP client for the upstream weather service.
//!
//! One outbound GET per lookup, no retry, no explicit timeout. The response
//! body is decoded into a [`WeatherReading`]; anything the display layer does
//! not consume is dropped at the wire boundary.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;

use crate::error::FetchError;
use crate::model::{CityQuery, WeatherReading};

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Seam between the view-state controller and the network.
///
/// The controller only ever talks to this trait, so tests can substitute a
/// canned or failing implementation.
#[async_trait]
pub trait FetchWeather: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &CityQuery) -> Result<WeatherReading, FetchError>;
}

/// Client for the OpenWeather "current weather" endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl FetchWeather for OpenWeatherClient {
    async fn fetch_weather(&self, city: &CityQuery) -> Result<WeatherReading, FetchError> {
        log::debug!("requesting current weather for '{city}'");

        let res = self
            .http
            .get(CURRENT_WEATHER_URL)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                // Metric units so `main.temp` arrives in Celsius.
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            log::warn!("weather lookup for '{city}' failed with status {status}");
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        decode_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct WireMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WireCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct WireWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct WireCurrent {
    name: String,
    dt: Option<i64>,
    main: WireMain,
    weather: Vec<WireCondition>,
    wind: WireWind,
}

/// Decode a current-weather response body into a [`WeatherReading`].
///
/// An empty `weather` array is a decode failure, not an "Unknown" placeholder:
/// the display layer must never see a reading with holes in it.
fn decode_current(body: &str) -> Result<WeatherReading, FetchError> {
    let parsed: WireCurrent = serde_json::from_str(body)?;

    let condition = parsed
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or(FetchError::MissingField("weather[0].description"))?;

    let observation_time = parsed
        .dt
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        .unwrap_or_else(Utc::now);

    Ok(WeatherReading {
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        condition,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        observation_time,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
