//! End-to-end request: location -> forecast -> stats -> recommendation.

use tracing::instrument;

use crate::error::WeatherError;
use crate::location::{coordinate_name, LocationQuery};
use crate::provider::WeatherProvider;
use crate::recommend::recommend;
use crate::stats::extract;
use crate::types::{OutfitReport, Place, Preference};

#[derive(Debug, Clone)]
pub struct OutfitService {
    provider: WeatherProvider,
}

impl OutfitService {
    pub fn new(provider: WeatherProvider) -> Self {
        Self { provider }
    }

    /// Resolve a query to a place. Coordinates are used as given; city names
    /// go through geocoding.
    pub async fn resolve(&self, query: &LocationQuery) -> Result<Place, WeatherError> {
        match query {
            LocationQuery::City(name) => self.provider.geocode_city(name).await,
            LocationQuery::Coordinates {
                latitude,
                longitude,
            } => Ok(Place {
                name: coordinate_name(*latitude, *longitude),
                latitude: *latitude,
                longitude: *longitude,
            }),
        }
    }

    #[instrument(skip(self), level = "info")]
    pub async fn recommend_for(
        &self,
        query: &LocationQuery,
        preference: Preference,
    ) -> Result<OutfitReport, WeatherError> {
        let place = self.resolve(query).await?;
        let series = self
            .provider
            .fetch_hourly(place.latitude, place.longitude)
            .await?;

        let stats = extract(&series)?;
        let recommendation = recommend(&stats, preference);

        tracing::info!("{}: {}", place.name, recommendation.label);

        Ok(OutfitReport {
            place,
            preference,
            stats,
            recommendation,
        })
    }
}
