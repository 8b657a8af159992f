//! HSV <-> RGB conversion.
//!
//! Hexcone model after Alvy Ray Smith, "Color Gamut Transform Pairs"
//! (SIGGRAPH 1978). HSV triples travel as [`glam::Vec3`] with
//! `x = hue`, `y = saturation`, `z = value`, all in [0, 1].
//!
//! # Lossy points
//!
//! Hue is undefined on the grey axis and saturation is undefined at black.
//! [`Color3::to_hsv`] reports `0` for whatever is undefined, so
//! `to_hsv(from_hsv(hsv))` does not return `hsv` there. RGB is still
//! recovered exactly: `from_hsv(to_hsv(c))` only loses rounding.

use crate::Color3;
use glam::Vec3;

impl Color3 {
    /// Converts an HSV triple to RGB.
    ///
    /// A hue of exactly `1.0` wraps around to red.
    ///
    /// ```rust
    /// use chroma3_core::Color3;
    /// use glam::Vec3;
    ///
    /// assert_eq!(Color3::from_hsv(Vec3::new(0.0, 1.0, 1.0)), Color3::RED);
    /// assert_eq!(Color3::from_hsv(Vec3::new(0.5, 0.0, 0.25)), Color3::splat(0.25));
    /// ```
    pub fn from_hsv(hsv: Vec3) -> Self {
        let (h, s, v) = (hsv.x, hsv.y, hsv.z);
        let h6 = 6.0 * h;
        let sector = h6.floor();
        let f = h6 - sector;

        let m = v * (1.0 - s);
        let n = v * (1.0 - s * f);
        let k = v * (1.0 - s * (1.0 - f));

        match (sector as i32).rem_euclid(6) {
            0 => Self::new(v, k, m),
            1 => Self::new(n, v, m),
            2 => Self::new(m, v, k),
            3 => Self::new(m, n, v),
            4 => Self::new(k, m, v),
            _ => Self::new(v, m, n),
        }
    }

    /// Converts RGB to an HSV triple.
    ///
    /// Hue is reported in `[0, 1)`; grey colors get hue and saturation `0`.
    pub fn to_hsv(rgb: Self) -> Vec3 {
        let lo = rgb.min();
        let v = rgb.max();
        if v == lo {
            return Vec3::new(0.0, 0.0, v);
        }

        let (f, i) = if rgb.r == lo {
            (rgb.g - rgb.b, 3.0)
        } else if rgb.g == lo {
            (rgb.b - rgb.r, 5.0)
        } else {
            (rgb.r - rgb.g, 1.0)
        };

        let mut h = (i - f / (v - lo)) / 6.0;
        if h == 1.0 {
            h = 0.0;
        }
        Vec3::new(h, (v - lo) / v, v)
    }

    /// Scales the HSV saturation by `factor`.
    ///
    /// Meant for sRGB-encoded values; linear input is not rejected but the
    /// result is perceptually skewed.
    pub fn scale_saturation(self, factor: f32) -> Self {
        let mut hsv = Self::to_hsv(self);
        hsv.y *= factor;
        Self::from_hsv(hsv)
    }
}
