//! Colormaps and palette generators.
//!
//! - [`Color3::jet_color_map`] - MATLAB-style jet ramp, blue at 0, red at 1
//! - [`Color3::rainbow_color_map`] - fully saturated hue sweep
//! - [`Color3::neon_gradient`] - cool-to-warm debug gradient
//! - [`Color3::ansi_map`] - 16-color ANSI terminal palette
//! - [`Color3::pastel_map`] - stable pseudo-random color per integer id
//!
//! With the `rand` feature, [`Color3::random`] and [`Color3::wheel_random`]
//! draw from a caller-supplied RNG.

use crate::Color3;
use glam::Vec3;

const ANSI: [Color3; 16] = [
    Color3::new(0.0, 0.0, 0.0),
    Color3::new(0.5, 0.0, 0.0),
    Color3::new(0.0, 0.5, 0.0),
    Color3::new(0.5, 0.5, 0.0),
    Color3::new(0.0, 0.0, 0.5),
    Color3::new(0.5, 0.0, 0.5),
    Color3::new(0.0, 0.5, 0.5),
    Color3::new(0.75, 0.75, 0.75),
    Color3::new(0.5, 0.5, 0.5),
    Color3::new(1.0, 0.0, 0.0),
    Color3::new(0.0, 1.0, 0.0),
    Color3::new(1.0, 1.0, 0.0),
    Color3::new(0.0, 0.0, 1.0),
    Color3::new(1.0, 0.0, 1.0),
    Color3::new(0.0, 1.0, 1.0),
    Color3::new(1.0, 1.0, 1.0),
];

impl Color3 {
    /// Jet colormap: maps `val` in [0, 1] to dark blue, blue, cyan, yellow,
    /// red, dark red.
    ///
    /// Each channel is a triangle with slope 4, truncated to [0, 1].
    ///
    /// ```rust
    /// use chroma3_core::Color3;
    ///
    /// assert_eq!(Color3::jet_color_map(0.0), Color3::new(0.0, 0.0, 0.5));
    /// assert_eq!(Color3::jet_color_map(1.0), Color3::new(0.5, 0.0, 0.0));
    /// ```
    pub fn jet_color_map(val: f32) -> Self {
        let r = (4.0 * val - 1.5).min(-4.0 * val + 4.5);
        let g = (4.0 * val - 0.5).min(-4.0 * val + 3.5);
        let b = (4.0 * val + 0.5).min(-4.0 * val + 2.5);
        Self::new(r, g, b).clamp(0.0, 1.0)
    }

    /// Fully saturated, full value color for `hue` in [0, 1].
    #[inline]
    pub fn rainbow_color_map(hue: f32) -> Self {
        Self::from_hsv(Vec3::new(hue, 1.0, 1.0))
    }

    /// Gradient from cyan-blue at `t = 0` to yellow at `t = 1`, clamped to [0, 1].
    pub fn neon_gradient(t: f32) -> Self {
        let g = (0.43 - t).abs() * 1.7;
        Self::new(t * 1.3 + 0.1, g * g, (1.0 - t) * 1.7).clamp(0.0, 1.0)
    }

    /// ANSI 16-color palette entry `i mod 16`.
    ///
    /// See also [`pastel_map`](Self::pastel_map).
    #[inline]
    pub fn ansi_map(i: u32) -> Self {
        ANSI[(i & 15) as usize]
    }

    /// Stable but arbitrary color for an integer id.
    ///
    /// The id is hashed (CRC-32) so that neighbouring ids land far apart on
    /// the hue wheel. Handy for tinting debug geometry per triangle, per
    /// cluster, etc.
    ///
    /// ```rust
    /// use chroma3_core::Color3;
    ///
    /// assert_eq!(Color3::pastel_map(42), Color3::pastel_map(42));
    /// ```
    pub fn pastel_map(i: u32) -> Self {
        let x = crc32(&i.to_le_bytes());
        let hue = ((x >> 22) & 1023) as f32 / 1023.0;
        let sat = ((x >> 11) & 2047) as f32 / 2047.0 * 0.5 + 0.25;
        let val = (x & 2047) as f32 / 2047.0 * 0.75 + 0.25;
        Self::from_hsv(Vec3::new(hue, sat, val))
    }

    /// Random unit-length vector, uniformly distributed over the sphere.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng>(rng: &mut R) -> Self {
        loop {
            let c = Self::new(
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
                rng.gen_range(-1.0..=1.0),
            );
            let len_sq = c.squared_length();
            if len_sq > 0.0 && len_sq <= 1.0 {
                return c / len_sq.sqrt();
            }
        }
    }

    /// One of the [`WHEEL`](Self::WHEEL) colors, chosen at random.
    #[cfg(feature = "rand")]
    pub fn wheel_random<R: rand::Rng>(rng: &mut R) -> Self {
        Self::WHEEL[rng.gen_range(0..Self::WHEEL.len())]
    }
}

/// CRC-32 (IEEE 802.3, reflected, poly 0xEDB88320).
fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &byte in bytes {
        crc ^= byte as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crc32_check_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
        assert_eq!(crc32(b""), 0);
    }

    #[test]
    fn test_jet_ramp() {
        assert_eq!(Color3::jet_color_map(0.0), Color3::new(0.0, 0.0, 0.5));
        assert_eq!(Color3::jet_color_map(0.125), Color3::new(0.0, 0.0, 1.0));
        assert_eq!(Color3::jet_color_map(0.375), Color3::new(0.0, 1.0, 1.0));
        assert_eq!(Color3::jet_color_map(0.5), Color3::new(0.5, 1.0, 0.5));
        assert_eq!(Color3::jet_color_map(0.625), Color3::new(1.0, 1.0, 0.0));
        assert_eq!(Color3::jet_color_map(0.875), Color3::new(1.0, 0.0, 0.0));
        assert_eq!(Color3::jet_color_map(1.0), Color3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_jet_stays_in_unit_cube() {
        for i in -10..=30 {
            let c = Color3::jet_color_map(i as f32 / 20.0);
            assert_eq!(c, c.clamp(0.0, 1.0));
        }
    }

    #[test]
    fn test_rainbow() {
        assert_eq!(Color3::rainbow_color_map(0.0), Color3::RED);
        assert!(Color3::rainbow_color_map(1.0 / 3.0).fuzzy_eq(Color3::GREEN));
        for i in 0..50 {
            let c = Color3::rainbow_color_map(i as f32 / 50.0);
            assert_relative_eq!(c.max(), 1.0);
            assert_relative_eq!(c.min(), 0.0);
        }
    }

    #[test]
    fn test_neon_gradient_clamped() {
        let lo = Color3::neon_gradient(0.0);
        assert_relative_eq!(lo.r, 0.1);
        assert_eq!(lo.b, 1.0);
        let hi = Color3::neon_gradient(1.0);
        assert_eq!(hi.r, 1.0);
        assert_eq!(hi.b, 0.0);
    }

    #[test]
    fn test_ansi_wraps() {
        assert_eq!(Color3::ansi_map(0), Color3::BLACK);
        assert_eq!(Color3::ansi_map(9), Color3::RED);
        assert_eq!(Color3::ansi_map(15), Color3::WHITE);
        assert_eq!(Color3::ansi_map(16), Color3::ansi_map(0));
        assert_eq!(Color3::ansi_map(u32::MAX), Color3::WHITE);
    }

    #[test]
    fn test_pastel_deterministic_and_spread() {
        for i in 0..64 {
            let c = Color3::pastel_map(i);
            assert_eq!(c, Color3::pastel_map(i));
            assert!(c.min() >= 0.0 && c.max() <= 1.0);
            assert!(c.max() >= 0.25);
        }
        let distinct = (0..16)
            .map(|i| Color3::pastel_map(i).to_argb())
            .collect::<std::collections::HashSet<_>>();
        assert!(distinct.len() > 12);
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_random_is_unit() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let c = Color3::random(&mut rng);
            assert_relative_eq!(c.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_wheel_random_in_wheel() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let c = Color3::wheel_random(&mut rng);
            assert!(Color3::WHEEL.contains(&c));
        }
    }
}
