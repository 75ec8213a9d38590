//! Outfit recommendations from hourly weather forecasts
//!
//! The core is pure: [`stats::extract`] reduces an hourly series to the
//! stats of its first day and [`recommend::recommend`] maps those stats and
//! a [`Preference`] to a [`Recommendation`]. The Open-Meteo provider and
//! [`OutfitService`] wrap the core with geocoding and forecast fetching.

pub mod error;
pub mod geocode;
pub mod location;
pub mod provider;
pub mod recommend;
pub mod render;
pub mod service;
pub mod stats;
pub mod types;

pub use error::{StatsError, WeatherError};
pub use location::LocationQuery;
pub use provider::{Endpoints, WeatherProvider};
pub use recommend::recommend;
pub use render::{render_failure, render_report};
pub use service::OutfitService;
pub use stats::extract;
pub use types::*;
