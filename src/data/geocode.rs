//! Open-Meteo geocoding API client
//!
//! Resolves free-text city names to coordinates using the Open-Meteo
//! geocoding service. Only the top match is used; ambiguous names are
//! silently resolved to the provider's first result.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::Place;

/// Base URL for the Open-Meteo geocoding API
const GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Errors that can occur when resolving a place name
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The place name matched no results
    #[error("City not found: '{0}'")]
    NotFound(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Response from the geocoding API
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    /// Absent entirely when the name matches nothing
    results: Option<Vec<GeocodingResult>>,
}

/// A single geocoding match
#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
}

/// Client for resolving city names via the Open-Meteo geocoding API
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl GeocodeClient {
    /// Creates a new GeocodeClient with default configuration
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: GEOCODING_BASE_URL.to_string(),
        }
    }

    /// Resolves a free-text place name to coordinates
    ///
    /// Issues one request with the name URL-encoded, requesting a single
    /// result. The top match wins; there is no disambiguation step.
    ///
    /// # Arguments
    /// * `name` - The city name as typed by the user
    ///
    /// # Returns
    /// * `Ok(Place)` - Coordinates of the top match
    /// * `Err(GeocodeError::NotFound)` - If the response contains zero results
    /// * `Err(GeocodeError::RequestFailed)` - On any transport failure
    pub async fn resolve(&self, name: &str) -> Result<Place, GeocodeError> {
        let url = format!(
            "{}?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(name)
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await?
            .json::<GeocodingResponse>()
            .await?;

        first_match(response).ok_or_else(|| GeocodeError::NotFound(name.to_string()))
    }
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the first match from a geocoding response, if any
fn first_match(response: GeocodingResponse) -> Option<Place> {
    let result = response.results?.into_iter().next()?;
    Some(Place {
        latitude: result.latitude,
        longitude: result.longitude,
    })
}
