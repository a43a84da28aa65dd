//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::data::ReadError;

/// Precise configuration faults.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("configuration missing field `{0}`")]
    MissingField(&'static str),
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Building or saving the chart failed.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("point {index} is not finite: ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
    #[error("render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}

impl ChartError {
    pub(crate) fn render(path: impl Into<PathBuf>, e: impl std::fmt::Display) -> Self {
        Self::Render {
            path: path.into(),
            message: e.to_string(),
        }
    }
}

/// Streaming the saved image to the terminal failed.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("open image file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preview {width}x{height} exceeds {max} pixels per side; lower --scale")]
    TooLarge { width: u32, height: u32, max: u32 },
    #[error("decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("encode SIXEL: {0}")]
    Encode(String),
    #[error("write SIXEL: {0}")]
    Write(#[from] io::Error),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("reading data: {0}")]
    Read(#[from] ReadError),
    #[error("no valid data points found in {}", path.display())]
    EmptyData { path: PathBuf },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("creating plot: {0}")]
    Chart(#[from] ChartError),
    #[error("displaying SIXEL: {0}")]
    Display(#[from] DisplayError),
}
