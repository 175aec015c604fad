mod chart;
pub mod styles;
#[cfg(test)]
mod tests;

pub use chart::{render_humidity_chart, render_temperature_chart, PlotError};
