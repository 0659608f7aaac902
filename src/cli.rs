//! Command-line interface parsing for Skycast
//!
//! This module handles parsing of CLI arguments using clap, including an
//! optional city to look up on startup and the display mode to open in.

use clap::Parser;
use thiserror::Error;

use crate::data::DisplayMode;

/// Environment variable consulted for the suggestion API key
const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified display mode is not recognized
    #[error("Invalid mode: '{0}'. Valid modes: current, historical, forecast")]
    InvalidMode(String),
}

/// Skycast - City weather lookup with activity suggestions
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Look up current, historical, and forecast weather for any city")]
#[command(version)]
pub struct Cli {
    /// City to look up immediately on startup
    ///
    /// Examples:
    ///   skycast                      # Start with an empty search box
    ///   skycast Paris                # Look up current weather for Paris
    ///   skycast Paris --mode forecast   # Open the forecast grid directly
    pub city: Option<String>,

    /// Display mode to open in (only meaningful with a CITY)
    ///
    /// Valid modes: current, historical, forecast
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Gemini API key for activity suggestions
    ///
    /// Falls back to the GEMINI_API_KEY environment variable; when
    /// neither is set, suggestions are disabled and everything else
    /// still works.
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// City to look up immediately, if specified
    pub initial_city: Option<String>,
    /// Display mode to fetch first
    pub initial_mode: DisplayMode,
    /// Suggestion API key, if configured
    pub api_key: Option<String>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            initial_city: None,
            initial_mode: DisplayMode::Current,
            api_key: None,
        }
    }
}

/// Parses a mode string argument into a DisplayMode.
///
/// # Arguments
/// * `s` - The mode string from CLI
///
/// # Returns
/// * `Ok(DisplayMode)` if the string matches a valid mode
/// * `Err(CliError::InvalidMode)` if the string doesn't match
pub fn parse_mode_arg(s: &str) -> Result<DisplayMode, CliError> {
    DisplayMode::from_str(s).ok_or_else(|| CliError::InvalidMode(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// The suggestion key resolves from `--api-key` first, then from the
    /// `GEMINI_API_KEY` environment variable.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an invalid mode was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let initial_mode = match &cli.mode {
            None => DisplayMode::Current,
            Some(mode_str) => parse_mode_arg(mode_str)?,
        };

        let api_key = cli
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV_VAR).ok())
            .filter(|key| !key.is_empty());

        Ok(StartupConfig {
            initial_city: cli.city.clone(),
            initial_mode,
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_arg_current_aliases() {
        assert_eq!(parse_mode_arg("current").unwrap(), DisplayMode::Current);
        assert_eq!(parse_mode_arg("now").unwrap(), DisplayMode::Current);
    }

    #[test]
    fn test_parse_mode_arg_historical_aliases() {
        assert_eq!(
            parse_mode_arg("historical").unwrap(),
            DisplayMode::Historical
        );
        assert_eq!(parse_mode_arg("history").unwrap(), DisplayMode::Historical);
        assert_eq!(parse_mode_arg("past").unwrap(), DisplayMode::Historical);
    }

    #[test]
    fn test_parse_mode_arg_forecast_aliases() {
        assert_eq!(parse_mode_arg("forecast").unwrap(), DisplayMode::Forecast);
        assert_eq!(parse_mode_arg("daily").unwrap(), DisplayMode::Forecast);
    }

    #[test]
    fn test_parse_mode_arg_invalid() {
        let result = parse_mode_arg("weekly");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid mode"));
        assert!(err.to_string().contains("weekly"));
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert!(config.initial_city.is_none());
        assert_eq!(config.initial_mode, DisplayMode::Current);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["skycast"]);
        assert!(cli.city.is_none());
        assert!(cli.mode.is_none());
        assert!(cli.api_key.is_none());
    }

    #[test]
    fn test_cli_parse_city_only() {
        let cli = Cli::parse_from(["skycast", "Paris"]);
        assert_eq!(cli.city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_cli_parse_city_with_mode() {
        let cli = Cli::parse_from(["skycast", "Paris", "--mode", "forecast"]);
        assert_eq!(cli.city.as_deref(), Some("Paris"));
        assert_eq!(cli.mode.as_deref(), Some("forecast"));
    }

    #[test]
    fn test_startup_config_from_cli_no_args() {
        let cli = Cli::parse_from(["skycast"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.initial_city.is_none());
        assert_eq!(config.initial_mode, DisplayMode::Current);
    }

    #[test]
    fn test_startup_config_from_cli_city_and_mode() {
        let cli = Cli::parse_from(["skycast", "Paris", "--mode", "historical"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.initial_city.as_deref(), Some("Paris"));
        assert_eq!(config.initial_mode, DisplayMode::Historical);
    }

    #[test]
    fn test_startup_config_from_cli_invalid_mode() {
        let cli = Cli::parse_from(["skycast", "Paris", "--mode", "weekly"]);
        let result = StartupConfig::from_cli(&cli);
        assert!(result.is_err());
    }

    #[test]
    fn test_startup_config_explicit_api_key_wins() {
        let cli = Cli::parse_from(["skycast", "--api-key", "cli-key"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("cli-key"));
    }

    #[test]
    fn test_startup_config_empty_api_key_disables_suggestions() {
        let cli = Cli::parse_from(["skycast", "--api-key", ""]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.api_key.is_none());
    }
}
