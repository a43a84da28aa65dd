//! Run-time configuration object + fluent builder.

use std::path::PathBuf;

use crate::core::{
    color::{DEFAULT_PALETTE, Palette},
    constants::{DEFAULT_HEIGHT, DEFAULT_LINE_WIDTH, DEFAULT_SCALE, DEFAULT_TITLE, DEFAULT_WIDTH},
    error::ConfigError,
};

/// Immutable parameters for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    /// Plot width in points (one point is one pixel).
    pub width: u32,
    /// Plot height in points.
    pub height: u32,
    /// Multiplier for the SIXEL preview only; the saved PNG ignores it.
    pub scale: f64,
    pub line_width: f64,
    pub colors: Palette,
    pub title: String,
    /// Draw title, mesh and axis labels.
    pub decorated: bool,
}

impl Config {
    #[inline]
    pub fn builder(input: impl Into<PathBuf>) -> ConfigBuilder {
        ConfigBuilder::new(input.into())
    }
}

/// Fluent builder; every field except the input has a default.
#[derive(Debug)]
pub struct ConfigBuilder {
    input: PathBuf,
    width: u32,
    height: u32,
    scale: f64,
    line_width: f64,
    colors: Palette,
    title: Option<String>,
    decorated: bool,
}

impl ConfigBuilder {
    pub(crate) fn new(input: PathBuf) -> Self {
        Self {
            input,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scale: DEFAULT_SCALE,
            line_width: DEFAULT_LINE_WIDTH,
            colors: DEFAULT_PALETTE,
            title: None,
            decorated: true,
        }
    }

    #[inline]
    #[must_use]
    pub fn width(mut self, w: u32) -> Self {
        self.width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, h: u32) -> Self {
        self.height = h;
        self
    }
    #[inline]
    #[must_use]
    pub fn scale(mut self, s: f64) -> Self {
        self.scale = s;
        self
    }
    #[inline]
    #[must_use]
    pub fn line_width(mut self, w: f64) -> Self {
        self.line_width = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn colors(mut self, p: Palette) -> Self {
        self.colors = p;
        self
    }
    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn decorated(mut self, on: bool) -> Self {
        self.decorated = on;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("input"));
        }
        positive("width", f64::from(self.width))?;
        positive("height", f64::from(self.height))?;
        positive("scale", self.scale)?;
        positive("line width", self.line_width)?;
        Ok(Config {
            input: self.input,
            width: self.width,
            height: self.height,
            scale: self.scale,
            line_width: self.line_width,
            colors: self.colors,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            decorated: self.decorated,
        })
    }
}

#[inline]
fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
