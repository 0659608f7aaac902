//! Core data models for Skycast
//!
//! This module contains all the data types used throughout the application
//! for representing resolved places, current weather, and daily records.

pub mod geocode;
pub mod weather;

pub use geocode::{GeocodeClient, GeocodeError};
#[allow(unused_imports)]
pub use weather::{sky_condition_from_code, WeatherClient, WeatherError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A place resolved from a free-text city name
///
/// Resolved once per query by the geocoder and handed straight to the
/// weather fetcher; never cached across queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
}

/// A snapshot of current weather conditions for one place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Current temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub windspeed: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Precipitation probability percentage (0-100)
    pub precipitation: u8,
    /// Raw WMO weather code
    pub weather_code: i32,
    /// Sky condition classified from the weather code
    pub condition: SkyCondition,
}

/// One day of aggregate weather, used for both historical and forecast lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar date of the record
    pub date: NaiveDate,
    /// Daily maximum temperature in Celsius
    pub max_temp: f64,
    /// Daily minimum temperature in Celsius
    pub min_temp: f64,
    /// Daily maximum wind speed in km/h
    pub windspeed: f64,
    /// Total precipitation in mm
    pub precipitation: f64,
}

/// Sky conditions classified from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkyCondition {
    ClearSky,
    PartlyCloudy,
    Foggy,
    Drizzle,
    Rainy,
    Snowy,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    Overcast,
}

impl SkyCondition {
    /// Returns the human-readable display label for the condition.
    ///
    /// These labels are embedded verbatim in the suggestion prompt, so
    /// they are part of the external contract, not just presentation.
    pub fn label(&self) -> &'static str {
        match self {
            SkyCondition::ClearSky => "Clear Sky",
            SkyCondition::PartlyCloudy => "Partly Cloudy",
            SkyCondition::Foggy => "Foggy",
            SkyCondition::Drizzle => "Drizzle",
            SkyCondition::Rainy => "Rainy",
            SkyCondition::Snowy => "Snowy",
            SkyCondition::RainShowers => "Rain Showers",
            SkyCondition::SnowShowers => "Snow Showers",
            SkyCondition::Thunderstorm => "Thunderstorm",
            SkyCondition::Overcast => "Overcast",
        }
    }
}

/// The three display modes the app can show
///
/// Exactly one is active at a time; switching modes discards the data
/// belonging to the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Current conditions plus activity suggestions
    Current,
    /// Daily aggregates for the trailing week
    Historical,
    /// Daily aggregates for the forward window
    Forecast,
}

impl DisplayMode {
    /// Returns a human-readable display label for the mode.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Current => "Current Weather",
            DisplayMode::Historical => "Historical Weather Data",
            DisplayMode::Forecast => "Weather Forecast",
        }
    }

    /// Parses user input into a DisplayMode.
    ///
    /// Matching is case-insensitive and supports aliases:
    /// - "current" | "now" -> Current
    /// - "historical" | "history" | "past" -> Historical
    /// - "forecast" | "daily" -> Forecast
    ///
    /// Returns `None` if the input doesn't match any mode.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<DisplayMode> {
        match s.to_lowercase().trim() {
            "current" | "now" => Some(DisplayMode::Current),
            "historical" | "history" | "past" => Some(DisplayMode::Historical),
            "forecast" | "daily" => Some(DisplayMode::Forecast),
            _ => None,
        }
    }
}
