//! # chroma3-core
//!
//! A three-channel `f32` color that doubles as a small 3D vector.
//!
//! [`Color3`] carries RGB colors and radiometric quantities (radiance,
//! irradiance, power, ...) through a renderer by value. It is `Copy`,
//! `#[repr(C)]` and has no invariants beyond "three floats": negative,
//! infinite and NaN channels are all legal.
//!
//! - Construction: [`Color3::new`], [`Color3::splat`], [`Color3::from_argb`],
//!   [`Color3::from_asrgb`], [`Color3::from_hsv`], arrays and [`glam::Vec3`]
//! - Arithmetic: `+ - * /` component-wise and by scalar, compound assignment
//! - Vector math: [`dot`](Color3::dot), [`cross`](Color3::cross),
//!   [`length`](Color3::length), [`direction`](Color3::direction)
//! - Colormaps: [`jet`](Color3::jet_color_map),
//!   [`rainbow`](Color3::rainbow_color_map), [`ansi`](Color3::ansi_map),
//!   [`pastel`](Color3::pastel_map)
//! - I/O: fixed 12-byte [binary layout](binary), [textual form](text),
//!   serde (feature `serde`)
//!
//! ## Usage
//!
//! ```rust
//! use chroma3_core::prelude::*;
//!
//! let sky: Radiance3 = Color3::from_argb(0x87CEEB) * 2.0;
//! let tinted = sky * Color3::ORANGE;
//! assert!(tinted.is_finite());
//!
//! let text = tinted.to_string();
//! assert_eq!(text.parse::<Color3>()?, tinted);
//! # Ok::<(), chroma3_core::Error>(())
//! ```
//!
//! ## Equality
//!
//! `==` is exact IEEE comparison per channel. Use [`Color3::fuzzy_eq`] after
//! arithmetic that rounds.
//!
//! ## Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Color3`] (enabled by default)
//! - `rand` - [`Color3::random`] and [`Color3::wheel_random`] (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod binary;
mod color3;
mod colormap;
pub mod error;
mod hsv;
mod named;
mod ops;
pub mod text;

#[cfg(feature = "serde")]
mod serde_impl;

pub use binary::Endian;
pub use color3::*;
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use chroma3_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::binary::Endian;
    pub use crate::color3::{
        Biradiance3, Color3, Energy3, Irradiance3, Power3, Radiance3, Radiosity3, FUZZY_EPSILON,
    };
    pub use crate::error::{Error, Result};
}
