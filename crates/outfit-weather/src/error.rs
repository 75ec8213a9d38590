//! Weather-specific error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Failures while reducing an hourly series to daily stats.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("Incomplete forecast data: {0}")]
    IncompleteData(String),

    #[error("No hourly data for {0} in forecast")]
    NoDataForDay(NaiveDate),
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Stats(#[from] StatsError),
}

impl WeatherError {
    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::LocationNotFound(name) => format!("No place found for '{}'", name),
            Self::Network(e) if e.is_timeout() => {
                "The weather service timed out. Please try again.".to_string()
            }
            Self::Network(_) => "Unable to reach the weather service.".to_string(),
            Self::Api { status, .. } if *status >= 500 => {
                "The weather service is having issues. Please try again later.".to_string()
            }
            Self::Api { status, .. } => format!("Network error: {}", status),
            Self::Parse(_) => "Received an unexpected forecast response.".to_string(),
            Self::Stats(e) => e.to_string(),
        }
    }

    /// Whether the same request could succeed later. Nothing here retries;
    /// callers decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
