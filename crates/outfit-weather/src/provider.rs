//! Open-Meteo client for hourly forecasts.

use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use url::Url;

use crate::error::WeatherError;
use crate::types::HourlySeries;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("outfit/", env!("CARGO_PKG_VERSION"));
const HOURLY_VARIABLES: &str = "temperature_2m,precipitation_probability,windspeed_10m";

/// Base URLs of the two Open-Meteo APIs in use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub forecast_url: String,
    pub geocoding_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            forecast_url: FORECAST_URL.to_string(),
            geocoding_url: GEOCODING_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    hourly: Option<HourlySeries>,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    endpoints: Endpoints,
}

impl WeatherProvider {
    pub fn new(timeout: Duration) -> Result<Self, WeatherError> {
        Self::with_endpoints(Endpoints::default(), timeout)
    }

    pub fn with_endpoints(endpoints: Endpoints, timeout: Duration) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the hourly series for a location, with timestamps in the
    /// location's own timezone (`timezone=auto`).
    ///
    /// A response without an `hourly` object yields an empty series; the
    /// stats extractor reports that as incomplete data.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_hourly(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<HourlySeries, WeatherError> {
        let latitude = latitude.to_string();
        let longitude = longitude.to_string();
        let url = build_url(
            &self.endpoints.forecast_url,
            &[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("hourly", HOURLY_VARIABLES),
                ("timezone", "auto"),
            ],
        )?;

        let response = self.client.get(url).send().await?;
        let body: ForecastResponse = self.handle_response(response).await?;

        let series = body.hourly.unwrap_or_default();
        tracing::info!(
            "Fetched {} hourly samples",
            series.time.as_ref().map_or(0, Vec::len)
        );
        Ok(series)
    }

    pub(crate) fn geocoding_url(&self, name: &str) -> Result<Url, WeatherError> {
        build_url(
            &self.endpoints.geocoding_url,
            &[("name", name), ("count", "5")],
        )
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, WeatherError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| WeatherError::Parse(format!("JSON parse error: {}", e)))
        } else {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("Open-Meteo returned {}: {}", status, message);
            Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn build_url(base: &str, params: &[(&str, &str)]) -> Result<Url, WeatherError> {
    Url::parse_with_params(base, params)
        .map_err(|e| WeatherError::InvalidInput(format!("Invalid endpoint URL '{}': {}", base, e)))
}
