//! HSV command
//!
//! Converts an HSV triple to RGB, optionally rescaling saturation.

use crate::HsvArgs;
use anyhow::Result;
use chroma3_core::Color3;
use glam::Vec3;
use tracing::{trace, warn};

pub fn run(args: HsvArgs) -> Result<()> {
    trace!(h = args.h, s = args.s, v = args.v, "hsv::run");

    for (name, x) in [("hue", args.h), ("saturation", args.s), ("value", args.v)] {
        if !(0.0..=1.0).contains(&x) {
            warn!(component = name, value = x, "HSV component outside [0, 1]");
        }
    }

    let mut c = Color3::from_hsv(Vec3::new(args.h, args.s, args.v));
    if let Some(factor) = args.scale_saturation {
        c = c.scale_saturation(factor);
    }

    println!("{}", super::describe(c, None));
    Ok(())
}
