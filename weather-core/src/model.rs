use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A city name driving a weather lookup.
///
/// Construction enforces presence only: the input is trimmed and the empty
/// string is rejected. Anything else is passed to the upstream service as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    /// Build a query from raw user input, or `None` if nothing was entered.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() { None } else { Some(Self(trimmed)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The decoded subset of the upstream response used for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub observation_time: DateTime<Utc>,
}

impl WeatherReading {
    /// Temperature converted to Fahrenheit, computed on demand.
    pub fn temperature_f(&self) -> f64 {
        self.temperature_c * 9.0 / 5.0 + 32.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_query_trims_input() {
        let q = CityQuery::new("  Paris ").expect("non-empty input must parse");
        assert_eq!(q.as_str(), "Paris");
    }

    #[test]
    fn city_query_rejects_empty_and_whitespace() {
        assert!(CityQuery::new("").is_none());
        assert!(CityQuery::new("   ").is_none());
    }

    #[test]
    fn fahrenheit_conversion() {
        let reading = WeatherReading {
            location_name: "Test".into(),
            temperature_c: 20.0,
            condition: "clear sky".into(),
            humidity_pct: 50,
            wind_speed_mps: 1.0,
            observation_time: Utc::now(),
        };

        assert_eq!(reading.temperature_f(), 68.0);
        assert_eq!(format!("{:.2}", reading.temperature_f()), "68.00");
    }

    #[test]
    fn fahrenheit_of_freezing_point() {
        let reading = WeatherReading {
            location_name: "Test".into(),
            temperature_c: 0.0,
            condition: "snow".into(),
            humidity_pct: 90,
            wind_speed_mps: 0.0,
            observation_time: Utc::now(),
        };

        assert_eq!(reading.temperature_f(), 32.0);
    }
}
