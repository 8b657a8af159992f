//! Palette command
//!
//! Loads a YAML mapping of names to colors. Each value may use any shape
//! `Color3` deserializes from:
//!
//! ```yaml
//! key:     { r: 1.0, g: 0.95, b: 0.9 }
//! fill:    [0.2, 0.25, 0.3]
//! ambient: 0.05
//! rim:     "Color3::fromARGB(0xFFCC88)"
//! ```

use crate::PaletteArgs;
use anyhow::{anyhow, Context, Result};
use chroma3_core::Color3;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Named colors, sorted by name.
pub type Palette = BTreeMap<String, Color3>;

pub fn run(args: PaletteArgs) -> Result<()> {
    trace!(input = %args.input.display(), "palette::run");

    let palette = load_palette(&args.input)?;
    match &args.name {
        Some(name) => {
            let c = palette
                .get(name)
                .ok_or_else(|| anyhow!("No entry '{name}' in {}", args.input.display()))?;
            println!("{}", super::describe(*c, None));
        }
        None => {
            let width = palette.keys().map(String::len).max().unwrap_or(0);
            for (name, c) in &palette {
                println!("{name:<width$}  {}", super::describe(*c, None));
            }
        }
    }
    Ok(())
}

/// Read and parse a palette file.
pub fn load_palette(path: &Path) -> Result<Palette> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?;
    let palette = parse_palette(&text)
        .with_context(|| format!("Invalid palette: {}", path.display()))?;
    debug!(entries = palette.len(), path = %path.display(), "Loaded palette");
    Ok(palette)
}

/// Parse palette YAML text.
pub fn parse_palette(text: &str) -> Result<Palette> {
    Ok(serde_yaml::from_str(text)?)
}
