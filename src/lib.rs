//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use std::path::PathBuf;

pub use crate::core::{
    color::{ColorError, DEFAULT_PALETTE, Palette, Rgb},
    config::{Config, ConfigBuilder},
    data::{Dataset, LineError, Point, ReadError, parse_line, read_data, read_dataset},
    error::{ChartError, ConfigError, DisplayError, GraphError},
};

pub use render::{create_plot, display_sixel, is_sixel_supported, output_path, sixel_dimensions};

/// Plots an in-memory data set next to `cfg.input` and returns the PNG path.
pub fn plot_points(points: &[Point], cfg: &Config) -> Result<PathBuf, GraphError> {
    if points.is_empty() {
        return Err(GraphError::EmptyData {
            path: cfg.input.clone(),
        });
    }
    let out = output_path(&cfg.input);
    create_plot(points, &out, cfg)?;
    Ok(out)
}
