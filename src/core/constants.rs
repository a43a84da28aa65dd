//! A collection of constants.

/// Default plot width in points (one point is one pixel)
pub const DEFAULT_WIDTH: u32 = 1200;
/// Default plot height in points
pub const DEFAULT_HEIGHT: u32 = 1200;
/// Default SIXEL scale factor; 1.0 means "same size as the PNG"
pub const DEFAULT_SCALE: f64 = 1.0;
/// Default stroke width of the connecting line, in points
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
/// Chart caption used unless `--title` says otherwise
pub const DEFAULT_TITLE: &str = "Data Plot";

/// Radius of every scatter marker, in pixels
pub const SCATTER_RADIUS: u32 = 2;
/// Blank space around the plotting area, in pixels
pub const CHART_MARGIN: u32 = 20;

/// A trimmed line starting with one of these characters is a comment.
///
/// `/` is not a marker: `// foo` is a malformed line, not a comment.
pub const COMMENT_MARKERS: [char; 2] = ['#', '%'];

/// Appended to the input's file stem to name the saved image
pub const OUTPUT_SUFFIX: &str = "_plot.png";

/// Environment variable consulted for the SIXEL capability check
pub const TERM_VAR: &str = "TERM";
/// Lower-case fragments of `$TERM` values known to speak SIXEL
pub const SIXEL_TERMS: [&str; 3] = ["xterm", "vt340", "mlterm"];
/// Largest SIXEL preview edge, in pixels, after scaling
pub const MAX_PREVIEW_SIDE: u32 = 16_384;
