//! Line + scatter chart rendered with `plotters` and saved as PNG.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use plotters::{
    coord::Shift,
    prelude::*,
    style::{FontDesc, FontFamily, FontStyle},
};
use tracing::debug;

use crate::core::{
    bounds::Axis,
    color::Rgb,
    config::Config,
    constants::{CHART_MARGIN, OUTPUT_SUFFIX, SCATTER_RADIUS},
    data::Point,
    error::ChartError,
};

const CAPTION_SIZE: f64 = 24.0;
const LEFT_LABEL_AREA: u32 = 60;
const BOTTOM_LABEL_AREA: u32 = 40;

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.r, c.g, c.b)
    }
}

/// `dir/data.txt` → `dir/data_plot.png`.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    let mut name: OsString = input
        .file_stem()
        .map_or_else(|| OsString::from("data"), ToOwned::to_owned);
    name.push(OUTPUT_SUFFIX);
    input.with_file_name(name)
}

/// Stroke width in whole pixels, never thinner than one.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn stroke_width(line_width: f64) -> u32 {
    line_width.round().max(1.0) as u32
}

/// Reject the first point with a NaN or infinite coordinate; no axis can place it.
pub fn check_finite(points: &[Point]) -> Result<(), ChartError> {
    match points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        Some(index) => Err(ChartError::NonFinite {
            index,
            x: points[index].x,
            y: points[index].y,
        }),
        None => Ok(()),
    }
}

/// Draw `points` as a connected line plus markers and save the PNG at `out`.
///
/// Nothing is written when a point is not finite.
pub fn create_plot(points: &[Point], out: &Path, cfg: &Config) -> Result<(), ChartError> {
    check_finite(points)?;
    debug!(
        width = cfg.width,
        height = cfg.height,
        points = points.len(),
        "rendering {}",
        out.display()
    );
    let root = BitMapBackend::new(out, (cfg.width, cfg.height)).into_drawing_area();
    draw(&root, points, cfg).map_err(|e| ChartError::render(out, e))?;
    root.present().map_err(|e| ChartError::render(out, e))
}

/// Backend-agnostic drawing; the caller owns `present`.
pub fn draw<DB>(
    root: &DrawingArea<DB, Shift>,
    points: &[Point],
    cfg: &Config,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    let line = RGBColor::from(cfg.colors.line);
    let scatter = RGBColor::from(cfg.colors.scatter);

    root.fill(&RGBColor::from(cfg.colors.background))?;

    let (x_lo, x_hi) = Axis::X.bounds(points);
    let (y_lo, y_hi) = Axis::Y.bounds(points);

    let mut builder = ChartBuilder::on(root);
    builder.margin(CHART_MARGIN);
    if cfg.decorated {
        builder
            .caption(
                &cfg.title,
                FontDesc::new(FontFamily::SansSerif, CAPTION_SIZE, FontStyle::Normal),
            )
            .set_label_area_size(LabelAreaPosition::Left, LEFT_LABEL_AREA)
            .set_label_area_size(LabelAreaPosition::Bottom, BOTTOM_LABEL_AREA);
    }
    let mut chart = builder.build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    if cfg.decorated {
        chart
            .configure_mesh()
            .x_desc(Axis::X.to_string())
            .y_desc(Axis::Y.to_string())
            .draw()?;
    }

    let line_style = ShapeStyle {
        color: line.to_rgba(),
        filled: false,
        stroke_width: stroke_width(cfg.line_width),
    };
    chart.draw_series(LineSeries::new(
        points.iter().map(|p| (p.x, p.y)),
        line_style,
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.x, p.y), SCATTER_RADIUS, scatter.filled())),
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
