//! Free-text weather input resolver.
//!
//! The weather view accepts either a city name or a "lat, lon" pair in the
//! same input field; this module decides which request shape to issue.

use thiserror::Error;

/// A classified weather lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum WeatherQuery {
    Coordinates { lat: f64, lon: f64 },
    City(String),
}

/// Rejection for empty or whitespace-only input. No request is made.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("weather query is empty")]
pub struct EmptyQuery;

impl WeatherQuery {
    /// Classify raw user input.
    ///
    /// Splitting on comma must yield exactly two tokens that both parse as
    /// finite floats for a coordinate query; everything else is a name query
    /// carrying the whole trimmed input, not the split tokens.
    pub fn resolve(input: &str) -> Result<Self, EmptyQuery> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EmptyQuery);
        }

        let tokens: Vec<&str> = trimmed.split(',').collect();
        if let [lat, lon] = tokens.as_slice() {
            if let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
                if lat.is_finite() && lon.is_finite() {
                    return Ok(WeatherQuery::Coordinates { lat, lon });
                }
            }
        }

        Ok(WeatherQuery::City(trimmed.to_string()))
    }
}
