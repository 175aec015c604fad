//! Weather Forecaster
//!
//! A GUI application that shows current conditions and a 5 day forecast.

use anyhow::Context;
use eframe::egui;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use weathercast::app::{App, AppWrapper};
use weathercast::config::AppConfig;
use weathercast::provider::OpenWeatherClient;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("weathercast=info")),
        )
        .init();

    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    let config = AppConfig::load(config_path.as_deref()).context("loading configuration")?;
    let provider = OpenWeatherClient::new(config.provider.clone()).with_context(|| {
        format!(
            "creating weather client (set {} or provider.api_key)",
            weathercast::config::API_KEY_ENV
        )
    })?;

    // Initialize the Tokio runtime
    let rt = Runtime::new().context("starting tokio runtime")?;
    rt.block_on(async {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 900.0])
                .with_min_inner_size([700.0, 500.0])
                .with_title("Weather Forecaster"),
            ..Default::default()
        };

        eframe::run_native(
            "Weather Forecaster",
            options,
            Box::new(move |cc| {
                cc.egui_ctx.set_fonts(egui::FontDefinitions::default());

                let app = Arc::new(Mutex::new(App::new(Arc::new(provider), &config.ui)));
                Ok(Box::new(AppWrapper { app }) as Box<dyn eframe::App>)
            }),
        )
        .map_err(|e| anyhow::anyhow!("running application: {e}"))
    })
}
