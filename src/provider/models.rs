//! OpenWeatherMap response models
//!
//! Only the fields the dashboard reads are modeled; serde ignores the rest.

use serde::Deserialize;

/// Response of `GET /weather`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentResponse {
    pub dt: i64,
    pub name: String,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: MainReadings,
    #[serde(default)]
    pub visibility: Option<f64>,
    pub wind: Wind,
    pub clouds: Clouds,
    pub sys: Sys,
}

/// Response of `GET /forecast`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
    pub city: City,
}

/// One 3-hour slot of the forecast list
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastEntry {
    pub dt: i64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Wind,
    pub clouds: Clouds,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Condition {
    pub id: u16,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Clouds {
    pub all: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Sys {
    pub sunrise: i64,
    pub sunset: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct City {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

/// Error body, e.g. `{"cod":"404","message":"city not found"}`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: String,
}
