//! Activity suggestion client backed by the Gemini API
//!
//! Builds a natural-language prompt from the city, sky condition, and
//! temperature, submits one text-generation request, and parses the
//! free-text response into a list of discrete suggestions.
//!
//! The client is an optional capability: it is constructed with an
//! optional API key, and every call fails fast with `MissingApiKey`
//! when no key was provided. The rest of the app works without it.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::SkyCondition;

/// Base URL for the Gemini generateContent API
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Model used for suggestion generation
const GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Errors that can occur when generating activity suggestions
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// No API key was configured
    #[error("No suggestion API key configured (set --api-key or GEMINI_API_KEY)")]
    MissingApiKey,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The service returned no usable text
    #[error("The suggestion service returned an empty response")]
    EmptyResponse,
}

/// Request body for a generateContent call
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Response body of a generateContent call
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Client for fetching activity suggestions from the Gemini API
#[derive(Debug, Clone)]
pub struct SuggestionClient {
    /// HTTP client for making requests
    http_client: Client,
    /// API key; `None` disables the capability
    api_key: Option<String>,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl SuggestionClient {
    /// Creates a new SuggestionClient
    ///
    /// # Arguments
    /// * `api_key` - The Gemini API key, or `None` to disable suggestions
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    /// Whether a key is configured and suggestions can be requested
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Requests activity suggestions for a city and its current weather
    ///
    /// # Arguments
    /// * `city` - The city name as typed by the user
    /// * `condition` - The classified sky condition
    /// * `temperature` - Current temperature in Celsius
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Parsed suggestion lines, in response order
    /// * `Err(SuggestionError)` - If the key is missing, the request
    ///   fails, or the response contains no usable lines
    pub async fn suggest(
        &self,
        city: &str,
        condition: SkyCondition,
        temperature: f64,
    ) -> Result<Vec<String>, SuggestionError> {
        let api_key = self.api_key.as_deref().ok_or(SuggestionError::MissingApiKey)?;

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(city, condition, temperature),
                }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateResponse>()
            .await?;

        let text = response_text(&response).ok_or(SuggestionError::EmptyResponse)?;
        let suggestions = parse_suggestions(&text);

        if suggestions.is_empty() {
            return Err(SuggestionError::EmptyResponse);
        }

        Ok(suggestions)
    }
}

/// Builds the suggestion prompt, embedding the three inputs verbatim
fn build_prompt(city: &str, condition: SkyCondition, temperature: f64) -> String {
    format!(
        "Suggest activities to do in {} when the weather is {} and the temperature is {}°C. \
         List only concise activity suggestions, without explanations.",
        city,
        condition.label(),
        temperature
    )
}

/// Extracts the generated text block from the response, if any
fn response_text(response: &GenerateResponse) -> Option<String> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|part| part.text.clone())
}

/// Splits a raw response into discrete suggestion lines
///
/// Lines are trimmed; empty lines are dropped, as are lines containing
/// "Remember" or "suggestions" — a heuristic filter against the model
/// echoing its instructions back.
fn parse_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| {
            !line.is_empty() && !line.contains("Remember") && !line.contains("suggestions")
        })
        .map(str::to_string)
        .collect()
}
