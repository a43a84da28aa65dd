//! Line-oriented loader for `Y` / `X Y` text files.
//!
//! Every non-blank, non-comment line becomes one [`Point`].  A line that
//! fails to parse is logged and skipped; only I/O faults abort the read.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{bounds::Axis, constants::COMMENT_MARKERS};

// --- Public Row Structs ---
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line that was dropped during ingestion, with its 1-based line number.
#[derive(Debug)]
pub struct SkippedLine {
    pub line: usize,
    pub error: LineError,
}

/// Result of a full pass over one input.
#[derive(Debug, Default)]
pub struct Dataset {
    pub points: Vec<Point>,
    pub skipped: Vec<SkippedLine>,
}

// --- Error Handling ---

/// Why a single line could not become a point.  Never fatal.
#[derive(Debug, Error, PartialEq)]
pub enum LineError {
    #[error("invalid {axis} value {text:?}")]
    InvalidValue { axis: Axis, text: String },
    #[error("expected 1 or 2 values, got {0}")]
    UnsupportedFormat(usize),
}

/// Faults that end ingestion.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("scan file {} at line {line}: {source}", path.display())]
    Scan {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

// --- Helpers ---

/// Rewrite U+2212 MINUS SIGN (as pasted from documents) to ASCII `-`.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn is_skippable(line: &str) -> bool {
    line.chars()
        .next()
        .is_none_or(|c| COMMENT_MARKERS.contains(&c))
}

#[inline]
fn parse_f64(text: &str, axis: Axis) -> Result<f64, LineError> {
    let invalid = || LineError::InvalidValue {
        axis,
        text: text.to_owned(),
    };
    // lexical is the fast path; whatever std's grammar takes (`Infinity`,
    // `NaN`) is accepted too.  Non-finite points are refused by the chart.
    lexical_core::parse::<f64>(text.as_bytes())
        .or_else(|_| text.parse::<f64>())
        .map_err(|_| invalid())
}

/// Turn one trimmed, non-comment line into a point.
///
/// One field is a Y value plotted at `x = line_index`; two fields are `X Y`.
pub fn parse_line(line: &str, line_index: f64) -> Result<Point, LineError> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(y), None, _) => Ok(Point {
            x: line_index,
            y: parse_f64(y, Axis::Y)?,
        }),
        (Some(x), Some(y), None) => Ok(Point {
            x: parse_f64(x, Axis::X)?,
            y: parse_f64(y, Axis::Y)?,
        }),
        _ => Err(LineError::UnsupportedFormat(
            line.split_whitespace().count(),
        )),
    }
}

// --- Ingest ---
const BUF_CAP: usize = 64 * 1024;

/// Ingest every line of `src`.  `source` only labels diagnostics and errors.
pub fn read_points<R: Read>(src: R, source: &Path) -> Result<Dataset, ReadError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Dataset::default();
    // Counts parsed points only; comments and bad lines never advance it.
    let mut line_index = 0.0_f64;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ReadError::Scan {
            path: source.to_path_buf(),
            line: line_no + 1,
            source: e,
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        normalize_unicode_minus(&mut buf);
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim();
        if is_skippable(line) {
            continue;
        }

        match parse_line(line, line_index) {
            Ok(p) => {
                data.points.push(p);
                line_index += 1.0;
            }
            Err(error) => {
                warn!("Skipping line {line_no} in {}: {error}", source.display());
                data.skipped.push(SkippedLine {
                    line: line_no,
                    error,
                });
            }
        }
    }

    debug!(
        points = data.points.len(),
        skipped = data.skipped.len(),
        lines = line_no,
        "read {}",
        source.display()
    );
    Ok(data)
}

/// Open `path` and ingest it, keeping details about skipped lines.
pub fn read_dataset(path: &Path) -> Result<Dataset, ReadError> {
    let file = File::open(path).map_err(|e| ReadError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_points(file, path)
}

/// Open `path` and return its points in file order.
pub fn read_data(path: &Path) -> Result<Vec<Point>, ReadError> {
    read_dataset(path).map(|d| d.points)
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
