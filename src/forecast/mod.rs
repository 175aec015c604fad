mod alerts;
pub mod current;
mod pipeline;

pub use alerts::{ForecastAlerts, NO_ALERTS};
pub use current::{format_current, format_sun_times, status_caption, ConditionField};
pub use pipeline::{build_dashboard, Dashboard, DashboardError, DashboardRequest};
