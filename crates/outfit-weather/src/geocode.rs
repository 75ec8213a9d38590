//! Forward geocoding: convert a city name to coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use serde::Deserialize;
use tracing::instrument;

use crate::error::WeatherError;
use crate::provider::WeatherProvider;
use crate::types::Place;

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    admin1: Option<String>,
    country: Option<String>,
}

impl GeocodingResult {
    /// "Name, Region, Country", skipping the parts the API left out.
    fn display_name(&self) -> String {
        let mut name = self.name.clone();
        for part in [&self.admin1, &self.country].into_iter().flatten() {
            if !part.is_empty() {
                name.push_str(", ");
                name.push_str(part);
            }
        }
        name
    }
}

impl WeatherProvider {
    /// Resolve a city name to the top geocoding match.
    #[instrument(skip(self), level = "info")]
    pub async fn geocode_city(&self, name: &str) -> Result<Place, WeatherError> {
        let name = name.trim();
        let url = self.geocoding_url(name)?;

        let response = self.client().get(url).send().await?;
        let body: GeocodingResponse = self.handle_response(response).await?;

        let top = body
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| WeatherError::LocationNotFound(name.to_string()))?;

        let place = Place {
            name: top.display_name(),
            latitude: top.latitude,
            longitude: top.longitude,
        };

        tracing::info!("Geocoded '{}' to {}", name, place.name);
        Ok(place)
    }
}
