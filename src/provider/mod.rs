//! Weather data provider
//!
//! The dashboard talks to its data source through [`WeatherProvider`];
//! [`OpenWeatherClient`] is the HTTP implementation backed by OpenWeatherMap.

mod client;
mod models;

use async_trait::async_trait;

use crate::types::{CurrentConditions, Forecast, Units};

pub use client::{OpenWeatherClient, WeatherError};

/// Source of current conditions and forecasts for a free-text location
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Get the current conditions at `location`, e.g. `"Paris"` or `"Paris,FR"`
    async fn current(&self, location: &str, units: Units) -> Result<CurrentConditions, WeatherError>;

    /// Get the 5 day / 3 hour forecast for `location`, samples in time order
    async fn forecast(&self, location: &str, units: Units) -> Result<Forecast, WeatherError>;

    /// Get the PNG bytes of a condition icon
    async fn icon(&self, icon: &str) -> Result<Vec<u8>, WeatherError>;
}
