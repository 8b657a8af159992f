//! Named color constants.
//!
//! Every constant is available both as an associated `const` (`Color3::RED`)
//! and as an accessor function (`Color3::red()`). The accessor names are also
//! the names accepted by the textual form, e.g. `Color3::orange()`.

use crate::Color3;

impl Color3 {
    /// `(1, 0, 0)`
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// `(0, 1, 0)`
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// `(0, 0, 1)`
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// `(0.7, 0, 1)`
    pub const PURPLE: Self = Self::new(0.7, 0.0, 1.0);
    /// `(0, 0.7, 1)`
    pub const CYAN: Self = Self::new(0.0, 0.7, 1.0);
    /// `(1, 1, 0)`
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);
    /// `(0.5, 0.5, 0)`
    pub const BROWN: Self = Self::new(0.5, 0.5, 0.0);
    /// `(1, 0.5, 0)`
    pub const ORANGE: Self = Self::new(1.0, 0.5, 0.0);
    /// `(0, 0, 0)`
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// `(0.7, 0.7, 0.7)`
    pub const GRAY: Self = Self::new(0.7, 0.7, 0.7);
    /// `(1, 1, 1)`
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// All channels `0.0`.
    pub const ZERO: Self = Self::splat(0.0);
    /// All channels `1.0`.
    pub const ONE: Self = Self::splat(1.0);
    /// All channels NaN. Used as an "unset" sentinel; test with
    /// [`is_nan`](Self::is_nan), never with `==`.
    pub const NAN: Self = Self::splat(f32::NAN);

    /// Colors of the hue wheel. Excludes white, black, gray and brown.
    pub const WHEEL: [Self; 7] = [
        Self::RED,
        Self::GREEN,
        Self::BLUE,
        Self::PURPLE,
        Self::CYAN,
        Self::YELLOW,
        Self::ORANGE,
    ];

    /// See [`Color3::RED`].
    #[inline]
    pub const fn red() -> Self {
        Self::RED
    }

    /// See [`Color3::GREEN`].
    #[inline]
    pub const fn green() -> Self {
        Self::GREEN
    }

    /// See [`Color3::BLUE`].
    #[inline]
    pub const fn blue() -> Self {
        Self::BLUE
    }

    /// See [`Color3::PURPLE`].
    #[inline]
    pub const fn purple() -> Self {
        Self::PURPLE
    }

    /// See [`Color3::CYAN`].
    #[inline]
    pub const fn cyan() -> Self {
        Self::CYAN
    }

    /// See [`Color3::YELLOW`].
    #[inline]
    pub const fn yellow() -> Self {
        Self::YELLOW
    }

    /// See [`Color3::BROWN`].
    #[inline]
    pub const fn brown() -> Self {
        Self::BROWN
    }

    /// See [`Color3::ORANGE`].
    #[inline]
    pub const fn orange() -> Self {
        Self::ORANGE
    }

    /// See [`Color3::BLACK`].
    #[inline]
    pub const fn black() -> Self {
        Self::BLACK
    }

    /// See [`Color3::GRAY`].
    #[inline]
    pub const fn gray() -> Self {
        Self::GRAY
    }

    /// See [`Color3::WHITE`].
    #[inline]
    pub const fn white() -> Self {
        Self::WHITE
    }

    /// See [`Color3::ZERO`].
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// See [`Color3::ONE`].
    #[inline]
    pub const fn one() -> Self {
        Self::ONE
    }

    /// See [`Color3::NAN`].
    #[inline]
    pub const fn nan() -> Self {
        Self::NAN
    }

    /// Looks up a constant by its accessor name (`"red"`, `"one"`, ...).
    ///
    /// ```rust
    /// use chroma3_core::Color3;
    ///
    /// assert_eq!(Color3::named("orange"), Some(Color3::ORANGE));
    /// assert_eq!(Color3::named("mauve"), None);
    /// ```
    pub fn named(name: &str) -> Option<Self> {
        let c = match name {
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "purple" => Self::PURPLE,
            "cyan" => Self::CYAN,
            "yellow" => Self::YELLOW,
            "brown" => Self::BROWN,
            "orange" => Self::ORANGE,
            "black" => Self::BLACK,
            "gray" | "grey" => Self::GRAY,
            "white" => Self::WHITE,
            "zero" => Self::ZERO,
            "one" => Self::ONE,
            "nan" => Self::NAN,
            _ => return None,
        };
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Color3::red(), Color3::new(1.0, 0.0, 0.0));
        assert_eq!(Color3::black(), Color3::ZERO);
        assert_eq!(Color3::white(), Color3::ONE);
        assert_eq!(Color3::gray(), Color3::splat(0.7));
        assert!(Color3::nan().is_nan());
        assert_ne!(Color3::NAN, Color3::NAN);
    }

    #[test]
    fn test_named_lookup() {
        for (name, c) in [("red", Color3::RED), ("cyan", Color3::CYAN), ("zero", Color3::ZERO)] {
            assert_eq!(Color3::named(name), Some(c));
        }
        assert_eq!(Color3::named("grey"), Some(Color3::GRAY));
        assert!(Color3::named("nan").is_some_and(Color3::is_nan));
        assert_eq!(Color3::named("Red"), None);
    }

    #[test]
    fn test_wheel_excludes_neutrals() {
        for c in Color3::WHEEL {
            assert_ne!(c, Color3::WHITE);
            assert_ne!(c, Color3::BLACK);
            assert_ne!(c, Color3::GRAY);
        }
    }
}
