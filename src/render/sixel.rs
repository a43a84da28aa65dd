//! Inline preview of the saved PNG for SIXEL-capable terminals.

use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

use icy_sixel::{DiffusionMethod, MethodForLargest, MethodForRep, PixelFormat, Quality};
use image::{DynamicImage, ImageFormat, imageops::FilterType};
use tracing::debug;

use crate::core::{
    config::Config,
    constants::{MAX_PREVIEW_SIDE, SIXEL_TERMS},
    error::DisplayError,
};

/// Does this `$TERM` value belong to a terminal known to speak SIXEL?
#[must_use]
pub fn is_sixel_supported(term: &str) -> bool {
    let term = term.to_ascii_lowercase();
    SIXEL_TERMS.iter().any(|t| term.contains(t))
}

/// Size the preview should be resized to, or `None` to keep the PNG size.
///
/// Fractional pixels are truncated; a dimension never drops below one pixel.
#[must_use]
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn sixel_dimensions(cfg: &Config) -> Option<(u32, u32)> {
    if cfg.scale == 1.0 {
        return None;
    }
    let scaled = |v: u32| ((f64::from(v) * cfg.scale) as u32).max(1);
    Some((scaled(cfg.width), scaled(cfg.height)))
}

/// Decode the PNG at `path`.
pub fn load_image(path: &Path) -> Result<DynamicImage, DisplayError> {
    let file = File::open(path).map_err(|e| DisplayError::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(image::load(BufReader::new(file), ImageFormat::Png)?)
}

/// Encode `img` as a complete SIXEL escape sequence.
pub fn encode_sixel(img: &DynamicImage) -> Result<String, DisplayError> {
    let rgba = img.to_rgba8();
    let dim = |v: u32| i32::try_from(v).map_err(|e| DisplayError::Encode(e.to_string()));
    let (w, h) = (dim(rgba.width())?, dim(rgba.height())?);
    icy_sixel::sixel_string(
        rgba.as_raw(),
        w,
        h,
        PixelFormat::RGBA8888,
        DiffusionMethod::Stucki,
        MethodForLargest::Auto,
        MethodForRep::Auto,
        Quality::HIGH,
    )
    .map_err(|e| DisplayError::Encode(e.to_string()))
}

/// Stream the image at `path` to `out` when `term` supports SIXEL.
///
/// Returns `Ok(false)` without touching the file or `out` for unknown or
/// missing terminal types.
pub fn display_sixel<W: Write>(
    path: &Path,
    cfg: &Config,
    term: Option<&str>,
    out: &mut W,
) -> Result<bool, DisplayError> {
    if !term.is_some_and(is_sixel_supported) {
        debug!(term = term.unwrap_or(""), "terminal lacks SIXEL, skipping preview");
        return Ok(false);
    }

    let resize = sixel_dimensions(cfg);
    if let Some((width, height)) = resize {
        if width > MAX_PREVIEW_SIDE || height > MAX_PREVIEW_SIDE {
            return Err(DisplayError::TooLarge {
                width,
                height,
                max: MAX_PREVIEW_SIDE,
            });
        }
    }

    let mut img = load_image(path)?;
    if let Some((w, h)) = resize {
        debug!(w, h, "resizing preview");
        img = img.resize_exact(w, h, FilterType::Triangle);
    }

    let encoded = encode_sixel(&img)?;
    out.write_all(encoded.as_bytes())?;
    out.flush()?;
    Ok(true)
}

#[cfg(test)]
#[path = "sixel_tests.rs"]
mod tests;
