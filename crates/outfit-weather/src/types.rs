use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::WeatherError;

/// How warm the user tends to feel relative to the forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Feels the cold: recommendations lean towards heavier clothing
    Cold,
    #[default]
    Normal,
    /// Runs warm: recommendations lean towards lighter clothing
    Hot,
}

impl Preference {
    /// Additive shift in °C applied to the comparison temperatures.
    pub fn offset(self) -> f64 {
        match self {
            Self::Cold => -3.0,
            Self::Normal => 0.0,
            Self::Hot => 3.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Normal => "normal",
            Self::Hot => "hot",
        }
    }

    /// Lenient parse: unknown labels fall back to `Normal` (zero offset).
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown preference '{}', using normal", label);
            Self::Normal
        })
    }
}

impl FromStr for Preference {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cold" => Ok(Self::Cold),
            "normal" => Ok(Self::Normal),
            "hot" => Ok(Self::Hot),
            other => Err(WeatherError::InvalidInput(format!(
                "Unknown preference: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display icons used by clothing tiers and modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Coat,
    Scarf,
    TShirt,
    Umbrella,
    Wind,
}

impl Icon {
    /// Stable token for renderers that map icons themselves
    pub fn token(self) -> &'static str {
        match self {
            Self::Coat => "coat",
            Self::Scarf => "scarf",
            Self::TShirt => "tshirt",
            Self::Umbrella => "umbrella",
            Self::Wind => "wind",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Coat => "🧥",
            Self::Scarf => "🧣",
            Self::TShirt => "👕",
            Self::Umbrella => "☔",
            Self::Wind => "💨",
        }
    }
}

/// Hourly forecast arrays, index-aligned on `time`.
///
/// Field names follow the Open-Meteo `hourly` object so a forecast response
/// deserializes straight into this type. Timestamps are local to the
/// forecast location; no timezone conversion is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(default, with = "local_time")]
    pub time: Option<Vec<NaiveDateTime>>,
    #[serde(default, rename = "temperature_2m")]
    pub temperature: Option<Vec<f64>>,
    #[serde(default)]
    pub precipitation_probability: Option<Vec<Option<f64>>>,
    #[serde(default, rename = "windspeed_10m", alias = "wind_speed_10m")]
    pub wind_speed: Option<Vec<Option<f64>>>,
}

impl HourlySeries {
    pub fn new(time: Vec<NaiveDateTime>, temperature: Vec<f64>) -> Self {
        Self {
            time: Some(time),
            temperature: Some(temperature),
            precipitation_probability: None,
            wind_speed: None,
        }
    }

    pub fn with_precipitation(mut self, values: Vec<Option<f64>>) -> Self {
        self.precipitation_probability = Some(values);
        self
    }

    pub fn with_wind_speed(mut self, values: Vec<Option<f64>>) -> Self {
        self.wind_speed = Some(values);
        self
    }
}

/// Summary of a single calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub high: f64,
    pub low: f64,
    /// Highest hourly precipitation probability, percent
    pub max_precipitation: f64,
    pub max_wind: f64,
}

/// Advisory attached to the base clothing tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub text: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Icon of the base clothing tier
    pub icon: Icon,
    /// Clothing text followed by the modifier glyphs
    pub label: String,
    pub reasoning: String,
    pub clothing: String,
    pub modifiers: Vec<Modifier>,
}

/// Resolved location with a display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything a renderer needs for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitReport {
    pub place: Place,
    pub preference: Preference,
    pub stats: DailyStats,
    pub recommendation: Recommendation,
}

/// Parse a provider timestamp into its local wall-clock value.
///
/// Accepts `YYYY-MM-DDTHH:MM` (Open-Meteo), the same with seconds, and
/// RFC 3339 with an offset, in which case the offset is dropped.
pub fn parse_local_timestamp(raw: &str) -> Result<NaiveDateTime, WeatherError> {
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

    for format in FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(time);
        }
    }

    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .map_err(|_| WeatherError::Parse(format!("Unrecognized timestamp: {}", raw)))
}

mod local_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M";

    pub fn serialize<S: Serializer>(
        value: &Option<Vec<NaiveDateTime>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(times) => {
                serializer.collect_seq(times.iter().map(|t| t.format(FORMAT).to_string()))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<NaiveDateTime>>, D::Error> {
        let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
        raw.map(|times| {
            times
                .iter()
                .map(|t| super::parse_local_timestamp(t).map_err(serde::de::Error::custom))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()
    }
}
