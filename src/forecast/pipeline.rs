use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::provider::{WeatherError, WeatherProvider};
use crate::types::{metric, ChartKind, CurrentConditions, ForecastSeries, Units};
use crate::utils::{aggregate, AggregateError};

use super::ForecastAlerts;

/// Errors that abort a dashboard refresh
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Provide a city name!")]
    EmptyLocation,

    #[error(transparent)]
    Provider(#[from] WeatherError),
}

impl DashboardError {
    /// One-line message for the UI.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::EmptyLocation => self.to_string(),
            DashboardError::Provider(WeatherError::LocationNotFound(location)) => format!(
                "Location '{location}' not found. Try adding a country code, e.g. \"London,GB\"."
            ),
            DashboardError::Provider(e) => format!("Weather request failed: {e}"),
        }
    }
}

/// What the user asked for with one click of Submit
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRequest {
    pub location: String,
    pub units: Units,
    pub chart_kind: ChartKind,
}

/// Everything displayed for one request
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub request: DashboardRequest,
    pub current: CurrentConditions,
    /// PNG bytes of the condition icon, when it could be fetched
    pub icon: Option<Vec<u8>>,
    /// Location name as resolved by the forecast endpoint
    pub forecast_location: String,
    pub temperature: Result<ForecastSeries, AggregateError>,
    pub humidity: Result<ForecastSeries, AggregateError>,
    pub alerts: ForecastAlerts,
}

/// Fetch and aggregate everything the dashboard shows for `request`.
///
/// Provider failures abort the whole refresh. An aggregation failure only
/// affects the chart it belongs to.
#[instrument(skip(provider))]
pub async fn build_dashboard(
    provider: &dyn WeatherProvider,
    request: DashboardRequest,
) -> Result<Dashboard, DashboardError> {
    let location = request.location.trim().to_string();
    if location.is_empty() {
        return Err(DashboardError::EmptyLocation);
    }

    let current = provider.current(&location, request.units).await?;
    let forecast = provider.forecast(&location, request.units).await?;

    let icon = match current.icon.as_deref() {
        Some(icon) => match provider.icon(icon).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(error = %e, icon, "Skipping condition icon");
                None
            }
        },
        None => None,
    };

    let temperature = aggregate(&forecast.samples, metric::TEMP);
    let humidity = aggregate(&forecast.samples, metric::HUMIDITY);
    for (name, result) in [("temperature", &temperature), ("humidity", &humidity)] {
        if let Err(e) = result {
            warn!(error = %e, "Cannot chart {name}");
        }
    }

    info!(
        samples = forecast.samples.len(),
        days = temperature.as_ref().map(ForecastSeries::len).unwrap_or(0),
        "Dashboard ready"
    );

    Ok(Dashboard {
        request: DashboardRequest { location, ..request },
        current,
        icon,
        forecast_location: forecast.location,
        temperature,
        humidity,
        alerts: forecast.alerts,
    })
}
