//! Application-level error types.
//!
//! Library crates keep their own typed errors; everything the binary can
//! fail with converts into [`AppError`], which carries a message suitable
//! for showing to the user.

use outfit_weather::{StatsError, WeatherError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => e.user_message().to_string(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.".to_string(),
            AppError::Other(e) => e.to_string(),
        }
    }
}

impl From<StatsError> for AppError {
    fn from(e: StatsError) -> Self {
        AppError::Weather(WeatherError::Stats(e))
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Missing required setting: {0}")]
    MissingSetting(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "No configuration directory found. Check your environment.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::MissingSetting(_) => "A required setting is missing. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let app_err: AppError = ConfigError::Invalid("bad".into()).into();
        assert!(matches!(app_err, AppError::Config(ConfigError::Invalid(_))));
        assert_eq!(
            app_err.user_message(),
            "Invalid configuration. Check your settings."
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let app_err: AppError = io.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert_eq!(
            app_err.user_message(),
            "A file operation failed. Please try again."
        );
    }

    #[test]
    fn test_stats_error_becomes_weather_error() {
        let app_err: AppError = StatsError::IncompleteData("missing time".into()).into();
        assert!(matches!(
            app_err,
            AppError::Weather(WeatherError::Stats(StatsError::IncompleteData(_)))
        ));
        assert_eq!(
            app_err.user_message(),
            "Incomplete forecast data: missing time"
        );
    }

    #[test]
    fn test_weather_input_error_passes_message_through() {
        let app_err: AppError =
            WeatherError::InvalidInput("Please enter a city name".into()).into();
        assert_eq!(app_err.user_message(), "Please enter a city name");
    }

    #[test]
    fn test_other_error_message() {
        let app_err: AppError = anyhow::anyhow!("something odd").into();
        assert_eq!(app_err.user_message(), "something odd");
    }
}
