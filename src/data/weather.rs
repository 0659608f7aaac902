//! Open-Meteo weather API client
//!
//! This module provides functionality to fetch current, historical, and
//! forecast weather data from the Open-Meteo API and parse it into the
//! local data model, plus the WMO weather-code classifier.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::{CurrentWeather, DayRecord, Place, SkyCondition};

/// Base URL for the Open-Meteo forecast API
const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Daily aggregate fields requested for historical and forecast lookups
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum,windspeed_10m_max";

/// Look-back window for historical lookups, in days
const HISTORICAL_PAST_DAYS: u8 = 7;

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum WeatherError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Response JSON did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Client for fetching weather data from the Open-Meteo API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherClient {
    /// Creates a new WeatherClient with default configuration
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: OPEN_METEO_BASE_URL.to_string(),
        }
    }

    /// Fetches a current-weather snapshot for the given place
    ///
    /// Humidity and precipitation probability are not part of the API's
    /// current-weather block, so the first hourly sample is used as an
    /// approximation for both.
    ///
    /// # Returns
    /// * `Ok(CurrentWeather)` - Snapshot for the place
    /// * `Err(WeatherError)` - If the request or parsing fails
    pub async fn fetch_current(&self, place: Place) -> Result<CurrentWeather, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current_weather=true&hourly=temperature_2m,relativehumidity_2m,precipitation_probability,windspeed_10m",
            self.base_url, place.latitude, place.longitude
        );

        let text = self.http_client.get(&url).send().await?.text().await?;
        let response: CurrentResponse = serde_json::from_str(&text)
            .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

        parse_current(response)
    }

    /// Fetches daily aggregates for the trailing week
    ///
    /// Requests a true past-dates window (no forecast days), ordered
    /// chronologically as returned by the API.
    pub async fn fetch_historical(&self, place: Place) -> Result<Vec<DayRecord>, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&daily={}&past_days={}&forecast_days=0&timezone=auto",
            self.base_url, place.latitude, place.longitude, DAILY_FIELDS, HISTORICAL_PAST_DAYS
        );

        self.fetch_daily(&url).await
    }

    /// Fetches daily aggregates for the forward forecast window
    ///
    /// Uses the API's default forecast length with automatic timezone
    /// resolution.
    pub async fn fetch_forecast(&self, place: Place) -> Result<Vec<DayRecord>, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&daily={}&timezone=auto",
            self.base_url, place.latitude, place.longitude, DAILY_FIELDS
        );

        self.fetch_daily(&url).await
    }

    /// Issues a daily-aggregate request and parses the parallel arrays
    async fn fetch_daily(&self, url: &str) -> Result<Vec<DayRecord>, WeatherError> {
        let text = self.http_client.get(url).send().await?.text().await?;
        let response: DailyResponse = serde_json::from_str(&text)
            .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

        parse_daily(&response.daily)
    }
}

/// Parses the current-weather response into a CurrentWeather snapshot
fn parse_current(response: CurrentResponse) -> Result<CurrentWeather, WeatherError> {
    let current = response.current_weather;

    // First hourly sample stands in for "current" humidity/precipitation
    let humidity = response
        .hourly
        .relativehumidity_2m
        .first()
        .copied()
        .ok_or_else(|| WeatherError::MalformedResponse("empty relativehumidity_2m".to_string()))?;
    let precipitation = response
        .hourly
        .precipitation_probability
        .first()
        .copied()
        .ok_or_else(|| {
            WeatherError::MalformedResponse("empty precipitation_probability".to_string())
        })?;

    Ok(CurrentWeather {
        temperature: current.temperature,
        windspeed: current.windspeed,
        humidity: humidity.clamp(0.0, 100.0).round() as u8,
        precipitation: precipitation.clamp(0.0, 100.0).round() as u8,
        weather_code: current.weathercode,
        condition: sky_condition_from_code(current.weathercode),
    })
}

/// Parses daily parallel arrays into chronologically ordered DayRecords
///
/// All four value arrays must be positionally aligned with `time`; a
/// length mismatch is a malformed response.
fn parse_daily(daily: &DailyBlock) -> Result<Vec<DayRecord>, WeatherError> {
    let len = daily.time.len();

    if daily.temperature_2m_max.len() != len
        || daily.temperature_2m_min.len() != len
        || daily.precipitation_sum.len() != len
        || daily.windspeed_10m_max.len() != len
    {
        return Err(WeatherError::MalformedResponse(
            "daily arrays have inconsistent lengths".to_string(),
        ));
    }

    let mut records = Vec::with_capacity(len);

    for i in 0..len {
        let date = NaiveDate::parse_from_str(&daily.time[i], "%Y-%m-%d").map_err(|_| {
            WeatherError::MalformedResponse(format!("invalid date: {}", daily.time[i]))
        })?;
        records.push(DayRecord {
            date,
            max_temp: daily.temperature_2m_max[i],
            min_temp: daily.temperature_2m_min[i],
            windspeed: daily.windspeed_10m_max[i],
            precipitation: daily.precipitation_sum[i],
        });
    }

    Ok(records)
}

/// Map a WMO weather code to a SkyCondition
///
/// Total over all integers; anything outside the documented bands
/// (negative codes included) falls through to `Overcast`.
///
/// Weather codes from WMO (World Meteorological Organization):
/// - 0: Clear sky
/// - 1-3: Partly cloudy
/// - 45-48: Fog
/// - 51-57: Drizzle
/// - 61-67: Rain
/// - 71-77: Snow
/// - 80-82: Rain showers
/// - 85-86: Snow showers
/// - 95-99: Thunderstorm
pub fn sky_condition_from_code(code: i32) -> SkyCondition {
    match code {
        0 => SkyCondition::ClearSky,
        1..=3 => SkyCondition::PartlyCloudy,
        45..=48 => SkyCondition::Foggy,
        51..=57 => SkyCondition::Drizzle,
        61..=67 => SkyCondition::Rainy,
        71..=77 => SkyCondition::Snowy,
        80..=82 => SkyCondition::RainShowers,
        85..=86 => SkyCondition::SnowShowers,
        95..=99 => SkyCondition::Thunderstorm,
        _ => SkyCondition::Overcast,
    }
}

/// Open-Meteo current-weather response structure
#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current_weather: CurrentWeatherBlock,
    hourly: HourlyBlock,
}

/// The `current_weather` block of the response
#[derive(Debug, Deserialize)]
struct CurrentWeatherBlock {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
}

/// Hourly arrays, indexed by hour from the start of the window
#[derive(Debug, Deserialize)]
struct HourlyBlock {
    relativehumidity_2m: Vec<f64>,
    precipitation_probability: Vec<f64>,
}

/// Open-Meteo daily-aggregate response structure
#[derive(Debug, Deserialize)]
struct DailyResponse {
    daily: DailyBlock,
}

/// Daily parallel arrays, one entry per calendar day
#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_sum: Vec<f64>,
    windspeed_10m_max: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample valid current-weather response
    const VALID_CURRENT_RESPONSE: &str = r#"{
        "latitude": 48.86,
        "longitude": 2.35,
        "generationtime_ms": 0.123,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 38.0,
        "current_weather": {
            "time": "2024-07-15T14:00",
            "temperature": 22.5,
            "windspeed": 12.5,
            "winddirection": 270,
            "weathercode": 0,
            "is_day": 1
        },
        "hourly_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "relativehumidity_2m": "%",
            "precipitation_probability": "%",
            "windspeed_10m": "km/h"
        },
        "hourly": {
            "time": ["2024-07-15T00:00", "2024-07-15T01:00", "2024-07-15T02:00"],
            "temperature_2m": [15.2, 14.8, 14.5],
            "relativehumidity_2m": [65.0, 68.0, 71.0],
            "precipitation_probability": [30.0, 35.0, 40.0],
            "windspeed_10m": [5.2, 4.8, 4.5]
        }
    }"#;

    /// Sample valid daily-aggregate response
    const VALID_DAILY_RESPONSE: &str = r#"{
        "latitude": 48.86,
        "longitude": 2.35,
        "timezone": "Europe/Paris",
        "daily_units": {
            "time": "iso8601",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C",
            "precipitation_sum": "mm",
            "windspeed_10m_max": "km/h"
        },
        "daily": {
            "time": ["2024-07-15", "2024-07-16", "2024-07-17"],
            "temperature_2m_max": [24.5, 25.0, 23.1],
            "temperature_2m_min": [15.2, 16.0, 14.8],
            "precipitation_sum": [0.0, 1.2, 4.5],
            "windspeed_10m_max": [18.0, 12.5, 22.3]
        }
    }"#;

    #[test]
    fn test_parse_valid_current_response() {
        let response: CurrentResponse =
            serde_json::from_str(VALID_CURRENT_RESPONSE).expect("Failed to parse valid response");

        let weather = parse_current(response).expect("Failed to parse current weather");

        assert!((weather.temperature - 22.5).abs() < 0.01);
        assert!((weather.windspeed - 12.5).abs() < 0.01);
        assert_eq!(weather.humidity, 65);
        assert_eq!(weather.precipitation, 30);
        assert_eq!(weather.weather_code, 0);
        assert_eq!(weather.condition, SkyCondition::ClearSky);
    }

    #[test]
    fn test_current_uses_first_hourly_sample() {
        // Index 0 of the hourly arrays stands in for "current" values;
        // later samples must not leak in.
        let response: CurrentResponse =
            serde_json::from_str(VALID_CURRENT_RESPONSE).expect("Failed to parse valid response");

        let weather = parse_current(response).expect("Failed to parse current weather");
        assert_ne!(weather.humidity, 68);
        assert_ne!(weather.precipitation, 35);
    }

    #[test]
    fn test_empty_hourly_arrays_are_malformed() {
        let empty_hourly = r#"{
            "current_weather": {
                "temperature": 22.5,
                "windspeed": 12.5,
                "weathercode": 0
            },
            "hourly": {
                "relativehumidity_2m": [],
                "precipitation_probability": []
            }
        }"#;

        let response: CurrentResponse =
            serde_json::from_str(empty_hourly).expect("Failed to parse");
        let result = parse_current(response);

        assert!(result.is_err());
        match result {
            Err(WeatherError::MalformedResponse(msg)) => {
                assert!(msg.contains("relativehumidity_2m"));
            }
            _ => panic!("Expected MalformedResponse error"),
        }
    }

    #[test]
    fn test_humidity_is_clamped_to_percentage() {
        let out_of_range = r#"{
            "current_weather": {
                "temperature": 22.5,
                "windspeed": 12.5,
                "weathercode": 0
            },
            "hourly": {
                "relativehumidity_2m": [130.0],
                "precipitation_probability": [-5.0]
            }
        }"#;

        let response: CurrentResponse =
            serde_json::from_str(out_of_range).expect("Failed to parse");
        let weather = parse_current(response).expect("Failed to parse current weather");

        assert_eq!(weather.humidity, 100);
        assert_eq!(weather.precipitation, 0);
    }

    #[test]
    fn test_parse_valid_daily_response() {
        let response: DailyResponse =
            serde_json::from_str(VALID_DAILY_RESPONSE).expect("Failed to parse valid response");

        let records = parse_daily(&response.daily).expect("Failed to parse daily records");

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
        );
        assert!((records[0].max_temp - 24.5).abs() < 0.01);
        assert!((records[0].min_temp - 15.2).abs() < 0.01);
        assert!((records[0].windspeed - 18.0).abs() < 0.01);
        assert!((records[0].precipitation - 0.0).abs() < 0.01);
    }

    #[test]
    fn test_daily_records_are_positionally_aligned() {
        let response: DailyResponse =
            serde_json::from_str(VALID_DAILY_RESPONSE).expect("Failed to parse valid response");

        let records = parse_daily(&response.daily).expect("Failed to parse daily records");

        // Index 2 of every input array lands in record 2
        assert_eq!(
            records[2].date,
            NaiveDate::from_ymd_opt(2024, 7, 17).unwrap()
        );
        assert!((records[2].max_temp - 23.1).abs() < 0.01);
        assert!((records[2].min_temp - 14.8).abs() < 0.01);
        assert!((records[2].windspeed - 22.3).abs() < 0.01);
        assert!((records[2].precipitation - 4.5).abs() < 0.01);
    }

    #[test]
    fn test_daily_output_length_matches_time_array() {
        let response: DailyResponse =
            serde_json::from_str(VALID_DAILY_RESPONSE).expect("Failed to parse valid response");
        let time_len = response.daily.time.len();

        let records = parse_daily(&response.daily).expect("Failed to parse daily records");
        assert_eq!(records.len(), time_len);
    }

    #[test]
    fn test_daily_records_are_chronological() {
        let response: DailyResponse =
            serde_json::from_str(VALID_DAILY_RESPONSE).expect("Failed to parse valid response");

        let records = parse_daily(&response.daily).expect("Failed to parse daily records");

        for pair in records.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_misaligned_daily_arrays_are_malformed() {
        let daily = DailyBlock {
            time: vec!["2024-07-15".to_string(), "2024-07-16".to_string()],
            temperature_2m_max: vec![24.5], // one element short
            temperature_2m_min: vec![15.2, 16.0],
            precipitation_sum: vec![0.0, 1.2],
            windspeed_10m_max: vec![18.0, 12.5],
        };

        let result = parse_daily(&daily);

        assert!(result.is_err());
        match result {
            Err(WeatherError::MalformedResponse(msg)) => {
                assert!(msg.contains("inconsistent lengths"));
            }
            _ => panic!("Expected MalformedResponse error about inconsistent lengths"),
        }
    }

    #[test]
    fn test_invalid_date_is_malformed() {
        let daily = DailyBlock {
            time: vec!["not-a-date".to_string()],
            temperature_2m_max: vec![24.5],
            temperature_2m_min: vec![15.2],
            precipitation_sum: vec![0.0],
            windspeed_10m_max: vec![18.0],
        };

        let result = parse_daily(&daily);
        assert!(matches!(result, Err(WeatherError::MalformedResponse(_))));
    }

    #[test]
    fn test_empty_daily_arrays_parse_to_empty_sequence() {
        let daily = DailyBlock {
            time: Vec::new(),
            temperature_2m_max: Vec::new(),
            temperature_2m_min: Vec::new(),
            precipitation_sum: Vec::new(),
            windspeed_10m_max: Vec::new(),
        };

        let records = parse_daily(&daily).expect("Empty arrays are valid");
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        let malformed = "{ invalid json }";
        let result: Result<CurrentResponse, _> = serde_json::from_str(malformed);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_daily_block_fails_to_parse() {
        let missing = r#"{ "latitude": 48.86, "longitude": 2.35 }"#;
        let result: Result<DailyResponse, _> = serde_json::from_str(missing);
        assert!(result.is_err());
    }

    #[test]
    fn test_sky_condition_mapping() {
        // Clear sky
        assert_eq!(sky_condition_from_code(0), SkyCondition::ClearSky);

        // Partly cloudy
        assert_eq!(sky_condition_from_code(1), SkyCondition::PartlyCloudy);
        assert_eq!(sky_condition_from_code(2), SkyCondition::PartlyCloudy);
        assert_eq!(sky_condition_from_code(3), SkyCondition::PartlyCloudy);

        // Fog
        assert_eq!(sky_condition_from_code(45), SkyCondition::Foggy);
        assert_eq!(sky_condition_from_code(48), SkyCondition::Foggy);

        // Drizzle
        assert_eq!(sky_condition_from_code(51), SkyCondition::Drizzle);
        assert_eq!(sky_condition_from_code(55), SkyCondition::Drizzle);
        assert_eq!(sky_condition_from_code(57), SkyCondition::Drizzle);

        // Rain
        assert_eq!(sky_condition_from_code(61), SkyCondition::Rainy);
        assert_eq!(sky_condition_from_code(65), SkyCondition::Rainy);
        assert_eq!(sky_condition_from_code(67), SkyCondition::Rainy);

        // Snow
        assert_eq!(sky_condition_from_code(71), SkyCondition::Snowy);
        assert_eq!(sky_condition_from_code(75), SkyCondition::Snowy);
        assert_eq!(sky_condition_from_code(77), SkyCondition::Snowy);

        // Rain showers
        assert_eq!(sky_condition_from_code(80), SkyCondition::RainShowers);
        assert_eq!(sky_condition_from_code(82), SkyCondition::RainShowers);

        // Snow showers
        assert_eq!(sky_condition_from_code(85), SkyCondition::SnowShowers);
        assert_eq!(sky_condition_from_code(86), SkyCondition::SnowShowers);

        // Thunderstorm
        assert_eq!(sky_condition_from_code(95), SkyCondition::Thunderstorm);
        assert_eq!(sky_condition_from_code(99), SkyCondition::Thunderstorm);
    }

    #[test]
    fn test_unmapped_codes_default_to_overcast() {
        // Gaps between the documented bands
        assert_eq!(sky_condition_from_code(4), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(44), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(49), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(58), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(60), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(68), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(70), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(78), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(79), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(83), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(84), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(87), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(94), SkyCondition::Overcast);

        // Beyond the listed range, in both directions
        assert_eq!(sky_condition_from_code(100), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(255), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(-1), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(i32::MIN), SkyCondition::Overcast);
        assert_eq!(sky_condition_from_code(i32::MAX), SkyCondition::Overcast);
    }

    #[test]
    fn test_weather_client_default_base_url() {
        let client = WeatherClient::default();
        assert!(client.base_url.contains("api.open-meteo.com"));
    }
}
