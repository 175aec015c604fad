//! # Weather Forecast Dashboard Library
//!
//! `weathercast` is a library for fetching and visualizing weather forecasts.
//! It queries OpenWeatherMap for the current conditions and the 5 day / 3 hour
//! forecast of a city, reduces the forecast to daily minimum and maximum
//! values and renders them as charts in an interactive dashboard.
//!
//! ## Features
//!
//! - Current conditions: temperature, feels-like, clouds, wind, humidity,
//!   pressure, visibility, sunrise and sunset
//! - 5 day min/max temperature forecast as a bar or line chart
//! - 5 day humidity forecast
//! - Upcoming weather alerts (clouds, rain, snow, fog, storms...)
//! - Celsius or Fahrenheit
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::{Arc, Mutex};
//! use eframe::NativeOptions;
//! use weathercast::config::AppConfig;
//! use weathercast::provider::OpenWeatherClient;
//! use weathercast::WeatherApp;
//!
//! let config = AppConfig::load(None).unwrap();
//! let provider = Arc::new(OpenWeatherClient::new(config.provider.clone()).unwrap());
//! let app = Arc::new(Mutex::new(WeatherApp::new(provider, &config.ui)));
//! let app_wrapper = weathercast::app::AppWrapper { app };
//!
//! eframe::run_native(
//!     "Weather Forecaster",
//!     NativeOptions::default(),
//!     Box::new(|_cc| Ok(Box::new(app_wrapper))),
//! ).unwrap();
//! ```

pub mod app;
pub mod config;
pub mod forecast;
pub mod plotting;
pub mod provider;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::App as WeatherApp;
pub use types::{DailyAggregate, ForecastSeries, WeatherSample};
pub use utils::{aggregate, AggregateError};
