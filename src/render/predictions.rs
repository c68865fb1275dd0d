//! Predicted-vs-actual overlay figure.

use super::{drawing, ensure_parent, padded_range, RenderError};
use crate::utils::argsort;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const FIGURE: &str = "prediction";

/// Actual and predicted values for the same rows, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    actual: Vec<f64>,
    predicted: Vec<f64>,
}

impl Overlay {
    /// Pair two series. Both must be non-empty and of equal length.
    pub fn new(actual: Vec<f64>, predicted: Vec<f64>) -> Result<Self, RenderError> {
        if actual.len() != predicted.len() {
            return Err(RenderError::SeriesLengthMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(RenderError::EmptySeries(FIGURE));
        }
        Ok(Self { actual, predicted })
    }

    /// The same pairs reordered by ascending actual value.
    pub fn sorted(&self) -> Self {
        let order = argsort(&self.actual);
        Self {
            actual: order.iter().map(|&i| self.actual[i]).collect(),
            predicted: order.iter().map(|&i| self.predicted[i]).collect(),
        }
    }

    pub fn actual(&self) -> &[f64] {
        &self.actual
    }

    pub fn predicted(&self) -> &[f64] {
        &self.predicted
    }

    pub fn len(&self) -> usize {
        self.actual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty()
    }
}

/// Draw `raw` and `sorted` side by side into a PNG at `path`.
///
/// Actual values are a black line, predictions a red line with point markers,
/// both against the row index ("Neighborhood").
pub fn render_predictions(
    path: &Path,
    (width, height): (u32, u32),
    raw: &Overlay,
    sorted: &Overlay,
) -> Result<(), RenderError> {
    ensure_parent(path)?;

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing(FIGURE))?;

    let (left, right) = root.split_horizontally(width / 2);
    draw_overlay(&left, raw, SeriesLabelPosition::LowerLeft)?;
    draw_overlay(&right, sorted, SeriesLabelPosition::UpperLeft)?;

    root.present().map_err(drawing(FIGURE))?;
    Ok(())
}

fn draw_overlay(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    overlay: &Overlay,
    legend: SeriesLabelPosition,
) -> Result<(), RenderError> {
    let x_max = overlay.len().saturating_sub(1).max(1) as f64;
    let (y_min, y_max) = padded_range(overlay.actual.iter().chain(&overlay.predicted), false);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(drawing(FIGURE))?;

    chart
        .configure_mesh()
        .x_desc("Neighborhood")
        .draw()
        .map_err(drawing(FIGURE))?;

    chart
        .draw_series(LineSeries::new(indexed(&overlay.actual), &BLACK))
        .map_err(drawing(FIGURE))?
        .label("Housing Value")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));

    chart
        .draw_series(LineSeries::new(indexed(&overlay.predicted), &RED))
        .map_err(drawing(FIGURE))?
        .label("Regression")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .draw_series(indexed(&overlay.predicted).map(|p| Circle::new(p, 2, RED.filled())))
        .map_err(drawing(FIGURE))?;

    chart
        .configure_series_labels()
        .position(legend)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(drawing(FIGURE))?;

    Ok(())
}

fn indexed(values: &[f64]) -> impl Iterator<Item = (f64, f64)> + '_ {
    values.iter().enumerate().map(|(i, &v)| (i as f64, v))
}
