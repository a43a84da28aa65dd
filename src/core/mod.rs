//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;

// re-export frequently-used items for convenience
pub use bounds::Axis;
pub use color::{ColorError, DEFAULT_PALETTE, Palette, Rgb};
pub use config::{Config, ConfigBuilder};
pub use constants::{
    DEFAULT_HEIGHT, DEFAULT_LINE_WIDTH, DEFAULT_SCALE, DEFAULT_TITLE, DEFAULT_WIDTH,
    OUTPUT_SUFFIX, SIXEL_TERMS, TERM_VAR,
};
pub use data::{Dataset, LineError, Point, ReadError, SkippedLine, parse_line, read_data};
pub use error::{ChartError, ConfigError, DisplayError, GraphError};
