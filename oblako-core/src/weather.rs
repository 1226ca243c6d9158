//! Weather snapshot types as consumed from the backend.
//!
//! A snapshot is an immutable value: each successful query replaces the
//! previous one wholesale. Deserialization is all-or-nothing, so a snapshot
//! is either fully populated or absent; only `daily` may legitimately be
//! missing or empty.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Weather for one location, current conditions plus an optional forecast.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub location: LocationInfo,
    pub current: CurrentConditions,
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LocationInfo {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CurrentConditions {
    /// Air temperature in °C.
    pub temp: f64,
    /// Perceived temperature in °C.
    pub feels_like: f64,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// Pressure in hPa.
    pub pressure: u32,
    /// Human-readable condition label.
    pub weather: String,
    /// Provider icon code, e.g. "01d".
    pub icon: String,
    /// Wind speed in m/s.
    pub wind_speed: f64,
}

/// One forecast day. The backend sends extra fields (min/max) that this
/// client does not display; they are ignored on deserialization.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DailyForecast {
    /// Forecast date as epoch seconds.
    pub dt: i64,
    pub temp: f64,
    pub weather: String,
    pub icon: String,
}

impl DailyForecast {
    /// Forecast date, if `dt` is a representable timestamp.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }
}

/// Map a provider icon code to a terminal glyph.
///
/// Codes are two digits plus a day/night suffix ("01d", "10n"); only the
/// digits carry meaning for us.
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon.get(..2) {
        Some("01") => "☀",
        Some("02") => "⛅",
        Some("03") | Some("04") => "☁",
        Some("09") | Some("10") => "🌧",
        Some("11") => "⛈",
        Some("13") => "❄",
        Some("50") => "🌫",
        _ => "·",
    }
}
