// 📊 Chart Renderer - DeltaSeries → bar chart PNG
// Rendering is delegated to plotters; this module owns layout and the
// label/value wiring.

use crate::deltas::DeltaSeries;
use crate::error::TrendError;
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1280, 720);
const MAX_X_LABELS: usize = 14;

/// Y-axis range with ~10% headroom so the tallest bar clears the frame.
/// The floor stays at 0 unless a negative delta pulls it down.
fn y_range(values: &[i64]) -> (i64, i64) {
    let max_val = values.iter().copied().max().unwrap_or(0);
    let min_val = values.iter().copied().min().unwrap_or(0).min(0);

    let padding = (((max_val - min_val) as f64) * 0.1).max(1.0) as i64;

    let y_min = if min_val < 0 { min_val - padding } else { 0 };
    let y_max = max_val + padding;

    (y_min, y_max)
}

/// Draw the daily-delta bar chart and write it to `destination`.
///
/// X-axis categories follow the series order; one bar per labelled day.
/// Overwrites any existing file at the path. Filesystem and drawing
/// failures propagate; nothing is written on failure paths that error
/// before the final present.
pub fn render_bar_chart(
    series: &DeltaSeries,
    destination: &Path,
    title: &str,
) -> Result<(), TrendError> {
    if series.is_empty() {
        return Err(TrendError::EmptyRange);
    }

    let labels = series.labels();
    let values = series.values();
    let bar_count = labels.len();
    let (y_min, y_max) = y_range(&values);

    let root = BitMapBackend::new(destination, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 32))
        .margin(24)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d((0..bar_count).into_segmented(), y_min..y_max)
        .map_err(to_chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("Daily vaccinations")
        .x_labels(bar_count.min(MAX_X_LABELS))
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                labels.get(*i).cloned().unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(to_chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(2)
                .data(values.iter().copied().enumerate()),
        )
        .map_err(to_chart_err)?;

    root.present().map_err(to_chart_err)?;

    Ok(())
}

fn to_chart_err<E: std::fmt::Display>(err: E) -> TrendError {
    TrendError::Chart(err.to_string())
}
