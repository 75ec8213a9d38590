//! What the user asked for: a city name or a coordinate pair.

use crate::error::WeatherError;

#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl LocationQuery {
    pub fn city(name: &str) -> Result<Self, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherError::InvalidInput(
                "Please enter a city name".to_string(),
            ));
        }
        Ok(Self::City(name.to_string()))
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(WeatherError::InvalidInput(
                "Please provide numeric latitude and longitude".to_string(),
            ));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(WeatherError::InvalidInput(format!(
                "Latitude {} is outside -90..90",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidInput(format!(
                "Longitude {} is outside -180..180",
                longitude
            )));
        }
        Ok(Self::Coordinates {
            latitude,
            longitude,
        })
    }

    /// Parse coordinates typed as text.
    pub fn parse_coordinates(latitude: &str, longitude: &str) -> Result<Self, WeatherError> {
        let parse = |raw: &str| raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        Self::coordinates(parse(latitude), parse(longitude))
    }
}

/// Display name for a place given only by coordinates.
pub fn coordinate_name(latitude: f64, longitude: f64) -> String {
    format!("Lat {:.3}, Lon {:.3}", latitude, longitude)
}
