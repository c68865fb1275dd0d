//! Bar chart of standardized coefficients.

use super::{drawing, ensure_parent, padded_range, RenderError};
use plotters::prelude::*;
use std::path::Path;

const FIGURE: &str = "significance";

/// Draw one blue bar per attribute, labelled 1..=n, into a PNG at `path`.
///
/// `coefficients` should not include the bias coefficient.
pub fn render_significance(
    path: &Path,
    (width, height): (u32, u32),
    coefficients: &[f64],
) -> Result<(), RenderError> {
    if coefficients.is_empty() {
        return Err(RenderError::EmptySeries(FIGURE));
    }
    ensure_parent(path)?;

    let n = coefficients.len() as u32;
    let (y_min, y_max) = padded_range(coefficients, true);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(drawing(FIGURE))?;

    // Integer ranges include their end, so 1..n yields n segments.
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d((1u32..n).into_segmented(), y_min..y_max)
        .map_err(drawing(FIGURE))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n as usize)
        .x_desc("Attribute")
        .y_desc("Significance")
        .draw()
        .map_err(drawing(FIGURE))?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.filled())
                .margin(2)
                .data(bars(coefficients)),
        )
        .map_err(drawing(FIGURE))?;

    root.present().map_err(drawing(FIGURE))?;
    Ok(())
}

/// 1-based attribute number paired with its coefficient.
fn bars(coefficients: &[f64]) -> impl Iterator<Item = (u32, f64)> + '_ {
    coefficients
        .iter()
        .enumerate()
        .map(|(i, &c)| (i as u32 + 1, c))
}
