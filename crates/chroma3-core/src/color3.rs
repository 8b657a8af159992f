//! The three-channel color/vector value type.
//!
//! [`Color3`] stores RGB as three `f32` channels and doubles as a plain 3D
//! vector: length, dot, cross and normalization all operate on `(r, g, b)`
//! as if it were `(x, y, z)`.
//!
//! # Usage
//!
//! ```rust
//! use chroma3_core::Color3;
//!
//! let c = Color3::from_argb(0xFF8000);
//! assert_eq!(c.r, 1.0);
//! assert_eq!(c.b, 0.0);
//!
//! let n = Color3::new(3.0, 0.0, 4.0).direction();
//! assert!((n.length() - 1.0).abs() < 1e-6);
//! ```
//!
//! # Radiometric aliases
//!
//! [`Radiance3`], [`Irradiance3`], [`Power3`] and friends are the same
//! type under another name. They document which physical quantity a value
//! carries and nothing more.

use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

/// Tolerance on squared distance used by [`Color3::fuzzy_eq`].
pub const FUZZY_EPSILON: f32 = 1e-5;

/// Three-channel floating-point color.
///
/// Also used for radiometric quantities and as a small 3D vector.
/// Channels may hold any `f32`, including negative, infinite and NaN values.
///
/// # Equality
///
/// `==` compares all three channels with IEEE float equality, so a color
/// containing NaN never equals anything. Use [`fuzzy_eq`](Self::fuzzy_eq)
/// when accumulated rounding is expected.
///
/// # Example
///
/// ```rust
/// use chroma3_core::Color3;
///
/// let gray = Color3::splat(0.5);
/// assert_eq!(gray, Color3::new(0.5, 0.5, 0.5));
/// assert_eq!(gray[1], 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Color3 {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

/// Radiance * solid angle between two points, measured at the receiver; W/m^2.
pub type Biradiance3 = Color3;

/// Power per (solid angle * area); W / (m^2 sr).
pub type Radiance3 = Color3;

/// Power per area; J / m^2.
pub type Radiosity3 = Color3;

/// Force * distance; J.
pub type Energy3 = Color3;

/// Incident power per area; W/m^2.
pub type Irradiance3 = Color3;

/// Energy per time; W.
pub type Power3 = Color3;

impl Color3 {
    /// Creates a color from three channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color with all channels set to `v`.
    ///
    /// ```rust
    /// use chroma3_core::Color3;
    ///
    /// assert_eq!(Color3::splat(2.0), Color3::new(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[r, g, b]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Decodes an HTML-style packed color, e.g. `0xFF0000` is red.
    ///
    /// Each of the low three bytes is divided by 255. The top (alpha) byte
    /// is ignored.
    ///
    /// ```rust
    /// use chroma3_core::Color3;
    ///
    /// assert_eq!(Color3::from_argb(0x00FF00), Color3::GREEN);
    /// assert_eq!(Color3::from_argb(0xFF000000), Color3::BLACK);
    /// ```
    #[inline]
    pub fn from_argb(x: u32) -> Self {
        Self::from_unorm8([(x >> 16) as u8, (x >> 8) as u8, x as u8])
    }

    /// Like [`from_argb`](Self::from_argb), but treats the channels as
    /// sRGB-encoded and converts them to linear.
    pub fn from_asrgb(x: u32) -> Self {
        let c = Self::from_argb(x);
        Self::new(srgb_to_linear(c.r), srgb_to_linear(c.g), srgb_to_linear(c.b))
    }

    /// Packs into `0xFFRRGGBB`. Channels are clamped to [0, 1] and rounded.
    #[inline]
    pub fn to_argb(self) -> u32 {
        let [r, g, b] = self.to_unorm8();
        0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Creates from 8-bit normalized channels (`255` maps to `1.0`).
    #[inline]
    pub fn from_unorm8(c: [u8; 3]) -> Self {
        Self::new(c[0] as f32 / 255.0, c[1] as f32 / 255.0, c[2] as f32 / 255.0)
    }

    /// Converts to 8-bit normalized channels with clamping and rounding.
    /// NaN channels map to `0`.
    #[inline]
    pub fn to_unorm8(self) -> [u8; 3] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Returns the channels in reverse order.
    #[inline]
    pub const fn bgr(self) -> Self {
        Self::new(self.b, self.g, self.r)
    }

    /// Checked channel access. `None` for `i > 2`.
    #[inline]
    pub fn get(self, i: usize) -> Option<f32> {
        match i {
            0 => Some(self.r),
            1 => Some(self.g),
            2 => Some(self.b),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------

    /// All channels exactly `0.0`.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// All channels exactly `1.0`.
    #[inline]
    pub fn is_one(self) -> bool {
        self.r == 1.0 && self.g == 1.0 && self.b == 1.0
    }

    /// Any channel differs from `0.0`. NaN counts as non-zero.
    #[inline]
    pub fn non_zero(self) -> bool {
        self.r != 0.0 || self.g != 0.0 || self.b != 0.0
    }

    /// All channels finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    /// Any channel NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// `true` if the squared distance to `other` is within [`FUZZY_EPSILON`].
    ///
    /// ```rust
    /// use chroma3_core::Color3;
    ///
    /// let a = Color3::new(0.1, 0.2, 0.3);
    /// assert!(a.fuzzy_eq((a * 3.0) / 3.0));
    /// ```
    #[inline]
    pub fn fuzzy_eq(self, other: Self) -> bool {
        let d = (self - other).squared_length();
        d == 0.0 || d.abs() <= FUZZY_EPSILON
    }

    /// Negation of [`fuzzy_eq`](Self::fuzzy_eq).
    #[inline]
    pub fn fuzzy_ne(self, other: Self) -> bool {
        !self.fuzzy_eq(other)
    }

    // ------------------------------------------------------------------
    // Vector operations
    // ------------------------------------------------------------------

    /// Euclidean length over the three channels.
    #[inline]
    pub fn length(self) -> f32 {
        self.squared_length().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn squared_length(self) -> f32 {
        self.r * self.r + self.g * self.g + self.b * self.b
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.r * other.r + self.g * other.g + self.b * other.b
    }

    /// Cross product, treating `(r, g, b)` as `(x, y, z)`.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.g * other.b - self.b * other.g,
            self.b * other.r - self.r * other.b,
            self.r * other.g - self.g * other.r,
        )
    }

    /// Cross product followed by [`direction`](Self::direction).
    #[inline]
    pub fn unit_cross(self, other: Self) -> Self {
        self.cross(other).direction()
    }

    /// Unit-length copy of this vector.
    ///
    /// If the squared length is exactly `1.0` the value is returned as is.
    /// There is no zero guard: the zero vector produces NaN channels.
    ///
    /// ```rust
    /// use chroma3_core::Color3;
    ///
    /// assert!(Color3::ZERO.direction().is_nan());
    /// ```
    #[inline]
    pub fn direction(self) -> Self {
        let len_sq = self.squared_length();
        if len_sq != 1.0 {
            self / len_sq.sqrt()
        } else {
            self
        }
    }

    /// Normalizes in place when the length exceeds `tolerance`.
    ///
    /// Returns the length before normalization, or `0.0` (leaving `self`
    /// untouched) when the vector is too short to normalize.
    pub fn unitize(&mut self, tolerance: f32) -> f32 {
        let len = self.length();
        if len > tolerance {
            *self *= 1.0 / len;
            len
        } else {
            0.0
        }
    }

    /// [`unitize`](Self::unitize) with the customary `1e-6` tolerance.
    #[inline]
    pub fn unitize_default(&mut self) -> f32 {
        self.unitize(1e-6)
    }

    /// Linear interpolation: `a = 0` gives `self`, `a = 1` gives `other`.
    #[inline]
    pub fn lerp(self, other: Self, a: f32) -> Self {
        self + (other - self) * a
    }

    /// Raises every channel to `exp`.
    #[inline]
    pub fn powf(self, exp: f32) -> Self {
        Self::new(self.r.powf(exp), self.g.powf(exp), self.b.powf(exp))
    }

    /// Raises each channel to the matching channel of `exp`.
    #[inline]
    pub fn pow(self, exp: Self) -> Self {
        Self::new(self.r.powf(exp.r), self.g.powf(exp.g), self.b.powf(exp.b))
    }

    /// Component-wise minimum with another color.
    #[inline]
    pub fn min_color(self, other: Self) -> Self {
        Self::new(self.r.min(other.r), self.g.min(other.g), self.b.min(other.b))
    }

    /// Component-wise maximum with another color.
    #[inline]
    pub fn max_color(self, other: Self) -> Self {
        Self::new(self.r.max(other.r), self.g.max(other.g), self.b.max(other.b))
    }

    // ------------------------------------------------------------------
    // Reductions
    // ------------------------------------------------------------------

    /// Smallest channel.
    #[inline]
    pub fn min(self) -> f32 {
        self.r.min(self.g).min(self.b)
    }

    /// Largest channel.
    #[inline]
    pub fn max(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// `r + g + b`.
    #[inline]
    pub fn sum(self) -> f32 {
        self.r + self.g + self.b
    }

    /// Arithmetic mean of the channels.
    #[inline]
    pub fn average(self) -> f32 {
        self.sum() / 3.0
    }

    /// Clamps each channel into `[low, high]`.
    ///
    /// Unlike [`f32::clamp`] this never panics; `low > high` yields `high`
    /// in every channel.
    #[inline]
    pub fn clamp(self, low: f32, high: f32) -> Self {
        let c = |v: f32| v.max(low).min(high);
        Self::new(c(self.r), c(self.g), c(self.b))
    }

    // ------------------------------------------------------------------
    // Hashing
    // ------------------------------------------------------------------

    /// Deterministic hash over the channel bit patterns.
    ///
    /// Computed as `bits(r) + 37 * bits(g) + 101 * bits(b)`, with `-0.0`
    /// folded into `+0.0` so that equal colors hash equally.
    #[inline]
    pub fn hash_code(self) -> u64 {
        let [r, g, b] = self.canonical_bits();
        r as u64 + 37 * g as u64 + 101 * b as u64
    }

    #[inline]
    fn canonical_bits(self) -> [u32; 3] {
        let bits = |v: f32| if v == 0.0 { 0 } else { v.to_bits() };
        [bits(self.r), bits(self.g), bits(self.b)]
    }
}

/// sRGB EOTF, IEC 61966-2-1.
#[inline]
pub(crate) fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl Hash for Color3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl Index<usize> for Color3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Color3 index out of bounds: {}", i),
        }
    }
}

impl IndexMut<usize> for Color3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("Color3 index out of bounds: {}", i),
        }
    }
}

impl From<[f32; 3]> for Color3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Color3> for [f32; 3] {
    #[inline]
    fn from(c: Color3) -> [f32; 3] {
        c.to_array()
    }
}

impl From<glam::Vec3> for Color3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Color3> for glam::Vec3 {
    #[inline]
    fn from(c: Color3) -> glam::Vec3 {
        glam::Vec3::new(c.r, c.g, c.b)
    }
}
