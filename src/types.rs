//! # Common Types
//!
//! This module contains the types shared by the provider, the aggregator, the
//! chart renderer and the UI: forecast samples and their daily aggregates,
//! current-condition observations and the user's display selections.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::HashMap;
use std::fmt;

use crate::forecast::ForecastAlerts;

/// Metric keys carried by every [`WeatherSample`] the provider produces.
pub mod metric {
    pub const TEMP: &str = "temp";
    pub const FEELS_LIKE: &str = "feels_like";
    pub const HUMIDITY: &str = "humidity";
    pub const PRESSURE: &str = "pressure";
    pub const CLOUDS: &str = "clouds";
    pub const WIND_SPEED: &str = "wind_speed";
}

/// One timestamped reading from the 3-hourly forecast feed.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSample {
    /// Instant the reading refers to
    pub timestamp: DateTime<Utc>,
    /// Metric name to value, e.g. `"temp" -> 21.4`
    pub metrics: HashMap<String, f64>,
}

impl WeatherSample {
    pub fn new(timestamp: DateTime<Utc>, metrics: HashMap<String, f64>) -> Self {
        Self { timestamp, metrics }
    }

    /// UTC calendar date of the reading.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Value of `metric`, if the provider supplied it.
    pub fn metric(&self, metric: &str) -> Option<f64> {
        self.metrics.get(metric).copied()
    }
}

/// Minimum and maximum of one metric over a calendar date.
///
/// Both bounds are `None` only before the first sample of the date has been
/// folded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl DailyAggregate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            min: None,
            max: None,
        }
    }

    /// Fold one value into the bounds.
    pub fn observe(&mut self, value: f64) {
        if self.min.is_none_or(|min| value < min) {
            self.min = Some(value);
        }
        if self.max.is_none_or(|max| value > max) {
            self.max = Some(value);
        }
    }
}

/// Daily aggregates in first-appearance order, one per distinct date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSeries {
    days: Vec<DailyAggregate>,
}

impl ForecastSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, aggregate: DailyAggregate) {
        self.days.push(aggregate);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut DailyAggregate> {
        self.days.last_mut()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyAggregate> {
        self.days.iter()
    }

    pub fn as_slice(&self) -> &[DailyAggregate] {
        &self.days
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|day| day.date).collect()
    }

    pub fn mins(&self) -> Vec<Option<f64>> {
        self.days.iter().map(|day| day.min).collect()
    }

    pub fn maxes(&self) -> Vec<Option<f64>> {
        self.days.iter().map(|day| day.max).collect()
    }
}

impl<'a> IntoIterator for &'a ForecastSeries {
    type Item = &'a DailyAggregate;
    type IntoIter = std::slice::Iter<'a, DailyAggregate>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Temperature unit selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Celsius,
    Fahrenheit,
}

impl Units {
    pub const ALL: [Units; 2] = [Units::Celsius, Units::Fahrenheit];

    /// Unit system name understood by the provider's `units` query parameter.
    pub fn provider_system(self) -> &'static str {
        match self {
            Units::Celsius => "metric",
            Units::Fahrenheit => "imperial",
        }
    }

    pub fn degree_letter(self) -> char {
        match self {
            Units::Celsius => 'C',
            Units::Fahrenheit => 'F',
        }
    }

    /// Wind speed unit the provider reports in this unit system.
    pub fn wind_speed_unit(self) -> &'static str {
        match self {
            Units::Celsius => "m/s",
            Units::Fahrenheit => "mph",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Celsius => write!(f, "celsius"),
            Units::Fahrenheit => write!(f, "fahrenheit"),
        }
    }
}

/// How the temperature forecast is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Bar, ChartKind::Line];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "Bar Graph"),
            ChartKind::Line => write!(f, "Line Graph"),
        }
    }
}

/// A single present-moment observation for a location.
///
/// Temperatures and wind speed are already in the unit system that was
/// requested from the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Location name as resolved by the provider
    pub location: String,
    pub observed_at: DateTime<Utc>,
    /// Detailed status text, e.g. "scattered clouds"
    pub status: String,
    /// Provider icon id, e.g. "03d"
    pub icon: Option<String>,
    pub temperature: f64,
    pub feels_like: f64,
    /// Cloud coverage in percent
    pub clouds: f64,
    pub wind_speed: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    /// Visibility in metres
    pub visibility: Option<f64>,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// The 5-day / 3-hour forecast for a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub location: String,
    pub samples: Vec<WeatherSample>,
    pub alerts: ForecastAlerts,
}
