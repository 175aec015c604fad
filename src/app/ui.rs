use egui::{Color32, ComboBox, Context, RichText};
use image::ImageReader;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::error;

use super::App;
use crate::forecast::{build_dashboard, format_current, format_sun_times, status_caption};
use crate::plotting::{render_humidity_chart, render_temperature_chart};
use crate::types::{ChartKind, Units};

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context, app_arc: Arc<Mutex<App>>) {
    egui::SidePanel::left("side_panel").show(ctx, |ui| {
        ui.heading("Forecast Options");
        ui.separator();

        ui.label("Name of The City:");
        ui.text_edit_singleline(&mut app.location);

        ui.label("Temperature Unit:");
        ComboBox::new("units_selector", "")
            .selected_text(app.units.to_string())
            .show_ui(ui, |ui| {
                for units in Units::ALL {
                    ui.selectable_value(&mut app.units, units, units.to_string());
                }
            });

        ui.label("Graph Type:");
        ComboBox::new("chart_selector", "")
            .selected_text(app.chart_kind.to_string())
            .show_ui(ui, |ui| {
                for kind in ChartKind::ALL {
                    ui.selectable_value(&mut app.chart_kind, kind, kind.to_string());
                }
            });

        ui.separator();

        if ui.button("Submit").clicked() {
            handle_submit(app, ctx, app_arc.clone());
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Weather Forecaster");
        ui.label("Enter the city name, choose a temperature unit and a graph type.");
        ui.separator();

        if app.is_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Fetching weather... Please wait.");
            });
        }

        if let Some(message) = &app.error_message {
            ui.colored_label(Color32::RED, message.as_str());
        }

        egui::ScrollArea::vertical().show(ui, |ui| draw_dashboard(app, ui));
    });

    // Update plots if needed
    if app.update_needed {
        refresh_textures(app, ctx);
        app.update_needed = false;
    }
}

fn draw_dashboard(app: &App, ui: &mut egui::Ui) {
    let Some(dashboard) = &app.dashboard else {
        return;
    };
    let units = dashboard.request.units;

    if let Some(texture) = &app.icon_texture {
        ui.image(texture);
    }
    ui.label(RichText::new(status_caption(&dashboard.current)).italics());
    ui.heading(dashboard.current.location.as_str());
    for field in format_current(&dashboard.current, units) {
        ui.label(format!("{}: {}", field.label, field.value));
    }

    ui.separator();
    ui.heading("5 Day Min and Max Temperature");
    match &dashboard.temperature {
        Ok(_) => match &app.temperature_texture {
            Some(texture) => {
                ui.image(texture);
            }
            None => {
                ui.label("Temperature chart unavailable.");
            }
        },
        Err(e) => {
            ui.colored_label(Color32::RED, format!("Cannot chart temperature: {e}"));
        }
    }

    ui.separator();
    ui.heading("Upcoming Weather Alerts");
    for line in dashboard.alerts.messages() {
        ui.label(format!("- {line}"));
    }

    ui.separator();
    ui.heading("Sunrise and Sunset");
    for field in format_sun_times(&dashboard.current) {
        ui.label(format!("{} {}", field.label, field.value));
    }

    ui.separator();
    ui.heading("Humidity Index of 5 days");
    match &dashboard.humidity {
        Ok(_) => match &app.humidity_texture {
            Some(texture) => {
                ui.image(texture);
            }
            None => {
                ui.label("Humidity chart unavailable.");
            }
        },
        Err(e) => {
            ui.colored_label(Color32::RED, format!("Cannot chart humidity: {e}"));
        }
    }
}

fn handle_submit(app: &mut App, ctx: &Context, app_arc: Arc<Mutex<App>>) {
    let Some(request) = app.begin_request() else {
        return;
    };
    let provider = Arc::clone(&app.provider);
    let ctx = ctx.clone();

    tokio::spawn(async move {
        let outcome = build_dashboard(provider.as_ref(), request).await;
        match app_arc.lock() {
            Ok(mut app) => app.apply_outcome(outcome),
            Err(_) => error!("Failed to acquire app lock after refresh"),
        }
        ctx.request_repaint();
    });
}

/// Render the charts of the current dashboard and upload them as textures
fn refresh_textures(app: &mut App, ctx: &Context) {
    let temperature_path = app.temperature_plot_path();
    let humidity_path = app.humidity_plot_path();
    let Some(dashboard) = &app.dashboard else {
        return;
    };

    if let Err(e) = std::fs::create_dir_all(&app.plot_dir) {
        error!(error = %e, dir = %app.plot_dir.display(), "Cannot create plot directory");
        return;
    }

    let mut temperature_texture = None;
    if let Ok(series) = &dashboard.temperature {
        let request = &dashboard.request;
        match render_temperature_chart(&temperature_path, series, request.chart_kind, request.units) {
            Ok(()) => temperature_texture = load_plot_texture(ctx, &temperature_path, "temperature_plot"),
            Err(e) => error!(error = %e, "Plotting error"),
        }
    }

    let mut humidity_texture = None;
    if let Ok(series) = &dashboard.humidity {
        match render_humidity_chart(&humidity_path, series) {
            Ok(()) => humidity_texture = load_plot_texture(ctx, &humidity_path, "humidity_plot"),
            Err(e) => error!(error = %e, "Plotting error"),
        }
    }

    let icon_texture = dashboard.icon.as_deref().and_then(|bytes| {
        image::load_from_memory(bytes)
            .map_err(|e| error!(error = %e, "Failed to decode condition icon"))
            .ok()
            .map(|image| upload_texture(ctx, "icon_texture", &image))
    });

    app.temperature_texture = temperature_texture;
    app.humidity_texture = humidity_texture;
    app.icon_texture = icon_texture;
}

fn load_plot_texture(ctx: &Context, path: &Path, name: &str) -> Option<egui::TextureHandle> {
    match ImageReader::open(path).and_then(|reader| reader.decode().map_err(std::io::Error::other)) {
        Ok(image) => Some(upload_texture(ctx, name, &image)),
        Err(e) => {
            error!(error = %e, path = %path.display(), "Failed to load plot image");
            None
        }
    }
}

fn upload_texture(ctx: &Context, name: &str, image: &image::DynamicImage) -> egui::TextureHandle {
    let size = [image.width() as usize, image.height() as usize];
    let pixels = image.to_rgba8();
    let pixels = pixels.as_flat_samples();
    ctx.load_texture(
        name,
        egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
        egui::TextureOptions::LINEAR,
    )
}
