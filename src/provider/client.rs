//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap 2.5 API: current weather, the
//! 5 day / 3 hour forecast and condition icons.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::models::{CurrentResponse, ErrorResponse, ForecastEntry, ForecastResponse};
use super::WeatherProvider;
use crate::config::ProviderConfig;
use crate::forecast::ForecastAlerts;
use crate::types::{metric, CurrentConditions, Forecast, Units, WeatherSample};

/// Weather provider errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The provider could not resolve the location string
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API key was rejected
    #[error("Unauthorized: the API key was rejected")]
    Unauthorized,

    /// No API key configured
    #[error("No API key configured")]
    MissingApiKey,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// OpenWeatherMap HTTP client
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: ProviderConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client cannot
    /// be initialized.
    pub fn new(config: ProviderConfig) -> Result<Self, WeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Issue a location query against `endpoint` and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        location: &str,
        units: Units,
    ) -> Result<T, WeatherError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        debug!(url = %url, "Querying weather provider");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.config.api_key.as_str()),
                ("units", units.provider_system()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.message)
                .unwrap_or_default();
            return Err(Self::status_error(status, location, &message));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))
    }

    /// Map a non-success HTTP status to an error
    fn status_error(status: StatusCode, location: &str, message: &str) -> WeatherError {
        match status {
            StatusCode::NOT_FOUND => WeatherError::LocationNotFound(location.to_string()),
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s if message.is_empty() => WeatherError::RequestFailed(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}: {message}")),
        }
    }

    fn parse_timestamp(secs: i64) -> Result<DateTime<Utc>, WeatherError> {
        DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| WeatherError::ParseError(format!("Invalid unix timestamp: {secs}")))
    }

    /// Convert a current-weather response
    pub(crate) fn parse_current(data: CurrentResponse) -> Result<CurrentConditions, WeatherError> {
        let condition = data.weather.first();

        Ok(CurrentConditions {
            location: data.name,
            observed_at: Self::parse_timestamp(data.dt)?,
            status: condition
                .map(|c| c.description.clone())
                .unwrap_or_default(),
            icon: condition.and_then(|c| c.icon.clone()),
            temperature: data.main.temp,
            feels_like: data.main.feels_like,
            clouds: data.clouds.all,
            wind_speed: data.wind.speed,
            humidity: data.main.humidity,
            pressure: data.main.pressure,
            visibility: data.visibility,
            sunrise: Self::parse_timestamp(data.sys.sunrise)?,
            sunset: Self::parse_timestamp(data.sys.sunset)?,
        })
    }

    /// Convert a forecast response, keeping the provider's sample order
    pub(crate) fn parse_forecast(data: ForecastResponse) -> Result<Forecast, WeatherError> {
        let alerts = ForecastAlerts::from_condition_codes(
            data.list
                .iter()
                .flat_map(|entry| entry.weather.iter().map(|c| c.id)),
        );

        let samples = data
            .list
            .iter()
            .map(Self::parse_sample)
            .collect::<Result<Vec<_>, _>>()?;

        let location = match data.city.country {
            Some(country) if !country.is_empty() => format!("{}, {}", data.city.name, country),
            _ => data.city.name,
        };

        Ok(Forecast {
            location,
            samples,
            alerts,
        })
    }

    fn parse_sample(entry: &ForecastEntry) -> Result<WeatherSample, WeatherError> {
        let metrics = HashMap::from([
            (metric::TEMP.to_string(), entry.main.temp),
            (metric::FEELS_LIKE.to_string(), entry.main.feels_like),
            (metric::HUMIDITY.to_string(), entry.main.humidity),
            (metric::PRESSURE.to_string(), entry.main.pressure),
            (metric::CLOUDS.to_string(), entry.clouds.all),
            (metric::WIND_SPEED.to_string(), entry.wind.speed),
        ]);

        Ok(WeatherSample::new(Self::parse_timestamp(entry.dt)?, metrics))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current(&self, location: &str, units: Units) -> Result<CurrentConditions, WeatherError> {
        let data: CurrentResponse = self.get_json("weather", location, units).await?;
        Self::parse_current(data)
    }

    #[instrument(skip(self))]
    async fn forecast(&self, location: &str, units: Units) -> Result<Forecast, WeatherError> {
        let data: ForecastResponse = self.get_json("forecast", location, units).await?;
        let forecast = Self::parse_forecast(data)?;
        debug!(samples = forecast.samples.len(), "Forecast received");
        Ok(forecast)
    }

    #[instrument(skip(self))]
    async fn icon(&self, icon: &str) -> Result<Vec<u8>, WeatherError> {
        let url = format!(
            "{}/{}@4x.png",
            self.config.icon_base_url.trim_end_matches('/'),
            icon
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Icon request failed");
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::models::{City, Clouds, Condition, MainReadings, Sys, Wind};

    fn readings(temp: f64, humidity: f64) -> MainReadings {
        MainReadings {
            temp,
            feels_like: temp - 2.0,
            pressure: 1013.0,
            humidity,
        }
    }

    fn entry(dt: i64, temp: f64, code: u16) -> ForecastEntry {
        ForecastEntry {
            dt,
            main: readings(temp, 70.0),
            weather: vec![Condition {
                id: code,
                description: "test".to_string(),
                icon: None,
            }],
            wind: Wind { speed: 3.5 },
            clouds: Clouds { all: 40.0 },
        }
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = OpenWeatherClient::new(ProviderConfig::default());
        assert!(matches!(result, Err(WeatherError::MissingApiKey)));
    }

    #[test]
    fn test_client_creation() {
        let config = ProviderConfig {
            api_key: "secret".to_string(),
            ..Default::default()
        };
        assert!(OpenWeatherClient::new(config).is_ok());
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::NOT_FOUND, "Atlantis", "city not found"),
            WeatherError::LocationNotFound(ref loc) if loc == "Atlantis"
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::UNAUTHORIZED, "Paris", ""),
            WeatherError::Unauthorized
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::TOO_MANY_REQUESTS, "Paris", ""),
            WeatherError::RateLimitExceeded
        ));
        assert!(matches!(
            OpenWeatherClient::status_error(StatusCode::BAD_GATEWAY, "Paris", ""),
            WeatherError::ServiceUnavailable(_)
        ));

        let err = OpenWeatherClient::status_error(StatusCode::BAD_REQUEST, "", "Nothing to geocode");
        assert_eq!(err.to_string(), "Request failed: HTTP 400 Bad Request: Nothing to geocode");
    }

    #[test]
    fn test_parse_forecast() {
        let data = ForecastResponse {
            list: vec![
                entry(1_705_276_800, 4.0, 800),
                entry(1_705_287_600, 6.5, 500),
                entry(1_705_363_200, 2.0, 803),
            ],
            city: City {
                name: "London".to_string(),
                country: Some("GB".to_string()),
            },
        };

        let forecast = OpenWeatherClient::parse_forecast(data).expect("should parse");
        assert_eq!(forecast.location, "London, GB");
        assert_eq!(forecast.samples.len(), 3);
        assert_eq!(forecast.samples[1].metric(metric::TEMP), Some(6.5));
        assert_eq!(forecast.samples[1].metric(metric::HUMIDITY), Some(70.0));
        assert_eq!(forecast.samples[2].metric(metric::WIND_SPEED), Some(3.5));
        assert_eq!(
            forecast.samples[0].timestamp.format("%Y-%m-%d %H:%M").to_string(),
            "2024-01-15 00:00"
        );
        assert!(forecast.alerts.rain);
        assert!(forecast.alerts.clouds);
        assert!(!forecast.alerts.snow);
    }

    #[test]
    fn test_parse_current() {
        let data = CurrentResponse {
            dt: 1_705_320_000,
            name: "London".to_string(),
            weather: vec![Condition {
                id: 300,
                description: "light intensity drizzle".to_string(),
                icon: Some("09d".to_string()),
            }],
            main: readings(7.5, 81.0),
            visibility: Some(10000.0),
            wind: Wind { speed: 4.1 },
            clouds: Clouds { all: 90.0 },
            sys: Sys {
                sunrise: 1_705_305_492,
                sunset: 1_705_335_665,
            },
        };

        let current = OpenWeatherClient::parse_current(data).expect("should parse");
        assert_eq!(current.location, "London");
        assert_eq!(current.icon.as_deref(), Some("09d"));
        assert_eq!(current.status, "light intensity drizzle");
        assert!((current.temperature - 7.5).abs() < f64::EPSILON);
        assert!((current.humidity - 81.0).abs() < f64::EPSILON);
        assert!(current.sunrise < current.sunset);
    }

    #[test]
    fn test_parse_timestamp_out_of_range() {
        assert!(matches!(
            OpenWeatherClient::parse_timestamp(i64::MAX),
            Err(WeatherError::ParseError(_))
        ));
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::LocationNotFound("Atlantis".to_string());
        assert!(err.to_string().contains("Atlantis"));

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }
}
