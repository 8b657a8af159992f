//! Map command
//!
//! Evaluates a colormap (jet, rainbow, neon) at a value, or a palette
//! (ansi, pastel) at an integer id.

use crate::{MapArgs, MapKind};
use anyhow::{bail, Result};
use chroma3_core::Color3;
use tracing::{debug, trace};

pub fn run(args: MapArgs) -> Result<()> {
    trace!(kind = ?args.kind, value = args.value, count = args.count, "map::run");

    for (input, c) in sample(args.kind, args.value, args.count)? {
        println!("{input:>10}  {}", super::describe(c, None));
    }
    Ok(())
}

/// Evaluate `kind` `count` times.
///
/// Ramps are sampled evenly over `[0, value]` (a single sample sits at
/// `value`); palettes take ids `value, value + 1, ...`.
pub fn sample(kind: MapKind, value: f64, count: u32) -> Result<Vec<(String, Color3)>> {
    if count == 0 {
        bail!("--count must be at least 1");
    }

    match kind {
        MapKind::Jet | MapKind::Rainbow | MapKind::Neon => {
            let f: fn(f32) -> Color3 = match kind {
                MapKind::Jet => Color3::jet_color_map,
                MapKind::Rainbow => Color3::rainbow_color_map,
                _ => Color3::neon_gradient,
            };
            let out = (0..count)
                .map(|i| {
                    let t = if count == 1 {
                        value
                    } else {
                        value * i as f64 / (count - 1) as f64
                    };
                    (format!("{t:.4}"), f(t as f32))
                })
                .collect();
            Ok(out)
        }
        MapKind::Ansi | MapKind::Pastel => {
            if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
                bail!("{kind:?} expects a non-negative integer id, got {value}");
            }
            let start = value as u32;
            debug!(start, count, "Sampling palette");
            let f: fn(u32) -> Color3 = match kind {
                MapKind::Ansi => Color3::ansi_map,
                _ => Color3::pastel_map,
            };
            Ok((0..count)
                .map(|i| {
                    let id = start.wrapping_add(i);
                    (id.to_string(), f(id))
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ramp_sample() {
        let out = sample(MapKind::Jet, 1.0, 1).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].1, Color3::jet_color_map(1.0));
    }

    #[test]
    fn test_ramp_spans_zero_to_value() {
        let out = sample(MapKind::Rainbow, 1.0, 3).unwrap();
        assert_eq!(out[0].1, Color3::RED);
        assert_eq!(out[0].0, "0.0000");
        assert_eq!(out[2].0, "1.0000");
    }

    #[test]
    fn test_palette_ids() {
        let out = sample(MapKind::Ansi, 8.0, 3).unwrap();
        let ids: Vec<_> = out.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, ["8", "9", "10"]);
        assert_eq!(out[1].1, Color3::RED);
    }

    #[test]
    fn test_palette_rejects_fraction() {
        assert!(sample(MapKind::Pastel, 1.5, 1).is_err());
        assert!(sample(MapKind::Pastel, -1.0, 1).is_err());
        assert!(sample(MapKind::Jet, 0.5, 0).is_err());
    }
}
