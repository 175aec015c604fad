use super::chart::value_range;
use super::*;
use crate::types::{ChartKind, DailyAggregate, ForecastSeries, Units};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_test_series() -> (ForecastSeries, TempDir) {
    let temp_dir = TempDir::new().unwrap();

    let mut series = ForecastSeries::new();
    for (day, min, max) in [(15, 5.0, 15.0), (16, 18.0, 20.0), (17, -2.5, 3.0)] {
        let mut aggregate = DailyAggregate::new(NaiveDate::from_ymd_opt(2024, 1, day).unwrap());
        aggregate.observe(min);
        aggregate.observe(max);
        series.push(aggregate);
    }

    (series, temp_dir)
}

fn assert_png_written(path: &PathBuf) {
    let metadata = fs::metadata(path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_temperature_chart_kinds() {
    let (series, temp_dir) = setup_test_series();

    for kind in ChartKind::ALL {
        let path = temp_dir.path().join(format!("temperature_{kind:?}.png"));
        assert!(render_temperature_chart(&path, &series, kind, Units::Celsius).is_ok());
        assert_png_written(&path);
    }
}

#[test]
fn test_humidity_chart() {
    let (series, temp_dir) = setup_test_series();
    let path = temp_dir.path().join("humidity.png");

    assert!(render_humidity_chart(&path, &series).is_ok());
    assert_png_written(&path);
}

#[test]
fn test_empty_series() {
    let (_, temp_dir) = setup_test_series();
    let empty = ForecastSeries::new();

    // Should handle empty data gracefully
    let path = temp_dir.path().join("empty.png");
    assert!(render_temperature_chart(&path, &empty, ChartKind::Line, Units::Fahrenheit).is_ok());
    assert!(render_humidity_chart(&path, &empty).is_ok());
}

#[test]
fn test_value_range() {
    assert_eq!(value_range(&[], true), (0.0, 1.0));

    // Bars keep a zero baseline
    let (lo, hi) = value_range(&[5.0, 15.0], true);
    assert_eq!(lo, 0.0);
    assert!(hi > 15.0);

    // Lines hug the data
    let (lo, hi) = value_range(&[5.0, 15.0], false);
    assert!(lo > 0.0 && lo < 5.0);
    assert!(hi > 15.0);

    let (lo, _) = value_range(&[-8.0, 3.0], true);
    assert!(lo < -8.0);
}
