use chrono::NaiveDate;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;

use super::styles::{ChartStyle, ChartTheme};
use crate::types::{ChartKind, ForecastSeries, Units};

pub type PlotError = Box<dyn Error + Send + Sync>;

type DayChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Draw the daily min/max temperature chart to a PNG at `path`.
///
/// Each day takes one slot on the x axis; days without values are skipped.
pub fn render_temperature_chart(
    path: &Path,
    series: &ForecastSeries,
    kind: ChartKind,
    units: Units,
) -> Result<(), PlotError> {
    let theme = ChartTheme::default();
    let style = ChartStyle::default();

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&theme.background_color)?;

    let values: Vec<f64> = series
        .iter()
        .flat_map(|day| [day.min, day.max])
        .flatten()
        .collect();
    let (y_min, y_max) = value_range(&values, kind == ChartKind::Bar);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Weekly Forecast",
            ("sans-serif", style.caption_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .x_label_area_size(style.label_area_size)
        .y_label_area_size(style.label_area_size)
        .build_cartesian_2d(day_axis(series.len()), y_min..y_max)?;

    let y_desc = format!("Temperature(°{})", units.degree_letter());
    draw_mesh(&mut chart, &series.dates(), &y_desc, &theme, &style)?;

    match kind {
        ChartKind::Bar => draw_temperature_bars(&mut chart, series, &theme, &style)?,
        ChartKind::Line => draw_temperature_lines(&mut chart, series, &theme, &style)?,
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(theme.background_color)
            .border_style(theme.axis_color)
            .label_font(("sans-serif", style.font_size).into_font().color(&theme.text_color))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Draw the daily maximum humidity as a bar chart to a PNG at `path`.
pub fn render_humidity_chart(path: &Path, series: &ForecastSeries) -> Result<(), PlotError> {
    let theme = ChartTheme::default();
    let style = ChartStyle::default();

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&theme.background_color)?;

    let values: Vec<f64> = series.iter().filter_map(|day| day.max).collect();
    let (y_min, y_max) = value_range(&values, true);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Humidity Forecast",
            ("sans-serif", style.caption_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .x_label_area_size(style.label_area_size)
        .y_label_area_size(style.label_area_size)
        .build_cartesian_2d(day_axis(series.len()), y_min..y_max)?;

    draw_mesh(&mut chart, &series.dates(), "Humidity (%)", &theme, &style)?;

    let half = style.bar_width / 2.0;
    let bars: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, day)| day.max.map(|max| (i as f64, max)))
        .collect();

    chart.draw_series(bars.iter().map(|&(x, y)| {
        Rectangle::new([(x - half, 0.0), (x + half, y)], theme.min_color.filled())
    }))?;
    chart.draw_series(bars.iter().map(|&(x, y)| {
        Text::new(format!("{}%", y.round() as i64), (x, y), bar_label_style(&theme, &style))
    }))?;

    root.present()?;
    Ok(())
}

/// One slot per day centered on its index.
fn day_axis(days: usize) -> std::ops::Range<f64> {
    -0.5..(days.max(1) as f64 - 0.5)
}

fn draw_mesh(
    chart: &mut DayChart<'_, '_>,
    dates: &[NaiveDate],
    y_desc: &str,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let x_label_formatter = |x: &f64| {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        dates
            .get(idx as usize)
            .map(|date| date.format("%m/%d").to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color)
        .axis_style(theme.axis_color)
        .x_labels(dates.len().max(1))
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&|y| format!("{:.0}", y))
        .x_desc("Day")
        .y_desc(y_desc)
        .label_style(("sans-serif", style.font_size).into_font().color(&theme.text_color))
        .draw()?;

    Ok(())
}

fn draw_temperature_bars(
    chart: &mut DayChart<'_, '_>,
    series: &ForecastSeries,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let half = style.bar_width / 2.0;
    let min_color = theme.min_color;
    let max_color = theme.max_color;

    // Min on the left half of the slot, max on the right.
    let mins: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, day)| day.min.map(|v| (i as f64 - half / 2.0, v)))
        .collect();
    let maxes: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, day)| day.max.map(|v| (i as f64 + half / 2.0, v)))
        .collect();

    chart
        .draw_series(mins.iter().map(|&(x, y)| {
            Rectangle::new([(x - half / 2.0, 0.0), (x + half / 2.0, y)], min_color.filled())
        }))?
        .label("Min")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], min_color.filled()));

    chart
        .draw_series(maxes.iter().map(|&(x, y)| {
            Rectangle::new([(x - half / 2.0, 0.0), (x + half / 2.0, y)], max_color.filled())
        }))?
        .label("Max")
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], max_color.filled()));

    chart.draw_series(mins.iter().chain(maxes.iter()).map(|&(x, y)| {
        Text::new(format!("{}°", y as i64), (x, y), bar_label_style(theme, style))
    }))?;

    Ok(())
}

fn draw_temperature_lines(
    chart: &mut DayChart<'_, '_>,
    series: &ForecastSeries,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let min_color = theme.min_color;
    let max_color = theme.max_color;

    let mins: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, day)| day.min.map(|v| (i as f64, v)))
        .collect();
    let maxes: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .filter_map(|(i, day)| day.max.map(|v| (i as f64, v)))
        .collect();

    chart
        .draw_series(
            LineSeries::new(mins, min_color.stroke_width(style.line_width))
                .point_size(style.point_size),
        )?
        .label("Min")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], min_color));

    chart
        .draw_series(
            LineSeries::new(maxes, max_color.stroke_width(style.line_width))
                .point_size(style.point_size),
        )?
        .label("Max")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], max_color));

    Ok(())
}

fn bar_label_style(theme: &ChartTheme, style: &ChartStyle) -> TextStyle<'static> {
    ("sans-serif", style.font_size)
        .into_font()
        .color(&theme.bar_label_color)
        .pos(Pos::new(HPos::Center, VPos::Top))
}

/// Y axis bounds with some headroom.
///
/// Bar charts keep zero in range so bars have a baseline.
pub(crate) fn value_range(values: &[f64], include_zero: bool) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }

    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }

    let pad = (hi - lo).max(1.0) * 0.1;
    let lower = if include_zero && lo >= 0.0 { 0.0 } else { lo - pad };
    (lower, hi + pad)
}
