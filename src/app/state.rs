use eframe::App as EApp;
use egui::TextureHandle;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

use crate::config::UiConfig;
use crate::forecast::{Dashboard, DashboardError, DashboardRequest};
use crate::provider::WeatherProvider;
use crate::types::{ChartKind, Units};

/// Main application state
#[derive(Clone)]
pub struct App {
    pub location: String,
    pub units: Units,
    pub chart_kind: ChartKind,
    pub provider: Arc<dyn WeatherProvider>,
    pub dashboard: Option<Dashboard>,
    pub error_message: Option<String>,
    pub is_loading: bool,
    pub update_needed: bool,
    pub plot_dir: PathBuf,
    pub temperature_texture: Option<TextureHandle>,
    pub humidity_texture: Option<TextureHandle>,
    pub icon_texture: Option<TextureHandle>,
}

impl App {
    pub fn new(provider: Arc<dyn WeatherProvider>, ui: &UiConfig) -> Self {
        Self {
            location: String::new(),
            units: ui.units,
            chart_kind: ui.chart,
            provider,
            dashboard: None,
            error_message: None,
            is_loading: false,
            update_needed: false,
            plot_dir: std::env::temp_dir().join("weathercast"),
            temperature_texture: None,
            humidity_texture: None,
            icon_texture: None,
        }
    }

    /// The request described by the current widget selections
    pub fn request(&self) -> DashboardRequest {
        DashboardRequest {
            location: self.location.clone(),
            units: self.units,
            chart_kind: self.chart_kind,
        }
    }

    /// Start a refresh for the current selections.
    ///
    /// Returns `None` while another refresh is in flight. Results of the
    /// previous refresh are cleared so nothing stale stays on screen.
    pub fn begin_request(&mut self) -> Option<DashboardRequest> {
        if self.is_loading {
            return None;
        }

        self.clear_results();
        self.is_loading = true;
        let request = self.request();
        info!(location = %request.location, units = %request.units, "Refreshing dashboard");
        Some(request)
    }

    /// Store the outcome of a refresh
    pub fn apply_outcome(&mut self, outcome: Result<Dashboard, DashboardError>) {
        self.is_loading = false;
        match outcome {
            Ok(dashboard) => {
                self.dashboard = Some(dashboard);
                self.update_needed = true;
            }
            Err(e) => {
                warn!(error = %e, "Dashboard refresh failed");
                self.clear_results();
                self.error_message = Some(e.user_message());
            }
        }
    }

    fn clear_results(&mut self) {
        self.dashboard = None;
        self.error_message = None;
        self.update_needed = false;
        self.temperature_texture = None;
        self.humidity_texture = None;
        self.icon_texture = None;
    }

    pub fn temperature_plot_path(&self) -> PathBuf {
        self.plot_dir.join("temperature_forecast.png")
    }

    pub fn humidity_plot_path(&self) -> PathBuf {
        self.plot_dir.join("humidity_forecast.png")
    }
}

/// Thread-safe wrapper around App for use with eframe
pub struct AppWrapper {
    pub app: Arc<Mutex<App>>,
}

impl EApp for AppWrapper {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(mut app) = self.app.lock() {
            super::ui::draw_ui(&mut app, ctx, Arc::clone(&self.app));
        } else {
            error!("Failed to acquire app lock in update");
        }
    }
}
