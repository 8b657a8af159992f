//! CLI command implementations

pub mod binary;
pub mod hsv;
pub mod map;
pub mod palette;
pub mod parse;

use anyhow::{Context, Result};
use chroma3_core::{Color3, Endian};

/// Parse a color expression given on the command line.
pub fn parse_color(text: &str) -> Result<Color3> {
    Color3::parse(text).with_context(|| format!("Invalid color: {text}"))
}

/// Parse an `--endian` argument.
pub fn parse_endian(text: &str) -> Result<Endian> {
    text.parse::<Endian>()
        .with_context(|| format!("Invalid byte order: {text}"))
}

/// One-line summary: canonical form, packed hex and HSV.
pub fn describe(c: Color3, precision: Option<usize>) -> String {
    let hsv = Color3::to_hsv(c);
    let canonical = match precision {
        Some(p) => format!("{c:.p$}"),
        None => c.to_string(),
    };
    format!(
        "{canonical}  #{:06X}  hsv({:.3}, {:.3}, {:.3})",
        c.to_argb() & 0x00FF_FFFF,
        hsv.x,
        hsv.y,
        hsv.z
    )
}
