use outfit_weather::{LocationQuery, OutfitReport, OutfitService, Preference, WeatherProvider};
use std::sync::Arc;

use crate::error::{AppError, ConfigError};
use crate::Config;

/// Application state: configuration plus the weather service built from it
pub struct App {
    config: Arc<Config>,
    service: OutfitService,
}

impl App {
    /// Create a new application instance from the config file
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(Config::load_validated()?)
    }

    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let provider = WeatherProvider::with_endpoints(
            config.weather.endpoints(),
            config.weather.request_timeout(),
        )?;

        tracing::debug!(
            "Using forecast endpoint {}",
            provider.endpoints().forecast_url
        );

        Ok(Self {
            config: Arc::new(config),
            service: OutfitService::new(provider),
        })
    }

    /// Run one recommendation. Missing arguments fall back to the config.
    pub async fn recommend(
        &self,
        query: Option<LocationQuery>,
        preference: Option<Preference>,
    ) -> Result<OutfitReport, AppError> {
        let query = match query {
            Some(q) => q,
            None => self.config.location.query()?.ok_or_else(|| {
                ConfigError::MissingSetting(
                    "no location given and none configured".to_string(),
                )
            })?,
        };
        let preference = preference.unwrap_or(self.config.weather.preference);

        tracing::info!("Recommending for {:?} with {} preference", query, preference);
        Ok(self.service.recommend_for(&query, preference).await?)
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_location_is_config_error() {
        let app = App::with_config(Config::default()).unwrap();
        let err = app.recommend(None, None).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::MissingSetting(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_configured_location_is_config_error() {
        let mut config = Config::default();
        config.location.longitude = Some(10.0);
        let app = App::with_config(config).unwrap();
        let err = app.recommend(None, Some(Preference::Hot)).await.unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_config_is_kept() {
        let mut config = Config::default();
        config.weather.preference = Preference::Cold;
        let app = App::with_config(config).unwrap();
        assert_eq!(app.config().weather.preference, Preference::Cold);
    }
}
