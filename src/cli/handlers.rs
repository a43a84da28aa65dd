use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use tracing::{debug, info};

use crate::{
    core::{
        color::Palette, config::Config, constants::TERM_VAR, data::read_dataset,
        error::GraphError,
    },
    plot_points,
    render::display_sixel,
};

use super::parse::Cli;

/// Turn parsed flags into a validated [`Config`].
pub fn config(a: Cli) -> Result<Config, GraphError> {
    let cfg = Config::builder(a.file)
        .width(a.width)
        .height(a.height)
        .scale(a.scale)
        .line_width(a.line_width)
        .colors(Palette {
            line: a.line_color,
            scatter: a.scatter_color,
            background: a.background,
        })
        .title(a.title)
        .decorated(!a.bare)
        .build()?;
    Ok(cfg)
}

/// Read, plot, save, and preview one data file.  Returns the PNG path.
pub fn plot<W: Write>(cfg: &Config, term: Option<&str>, out: &mut W) -> Result<PathBuf, GraphError> {
    debug!(?cfg, "configuration");

    let data = read_dataset(&cfg.input)?;
    if !data.skipped.is_empty() {
        info!(
            "Skipped {} malformed line(s) in {}",
            data.skipped.len(),
            cfg.input.display()
        );
    }

    let saved = plot_points(&data.points, cfg)?;
    info!("Plot saved to: {}", saved.display());

    display_sixel(&saved, cfg, term, out)?;
    Ok(saved)
}

pub fn run(a: Cli) -> Result<(), GraphError> {
    let cfg = config(a)?;
    let term = env::var(TERM_VAR).ok();
    plot(&cfg, term.as_deref(), &mut io::stdout().lock())?;
    Ok(())
}
