//! Error types for chroma3-core operations.
//!
//! Arithmetic on [`Color3`](crate::Color3) is total and never fails. Errors
//! only come from the edges of the crate:
//!
//! - Parsing the textual or structured form of a color
//! - Reading or writing the binary layout against an [`std::io`] stream
//!
//! # Usage
//!
//! ```rust
//! use chroma3_core::{Color3, Error};
//!
//! let err = "Color3(1, 2".parse::<Color3>().unwrap_err();
//! assert!(err.is_parse_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when converting a [`Color3`](crate::Color3) to or
/// from an external representation.
#[derive(Debug, Error)]
pub enum Error {
    /// Input text or structured value is not one of the accepted shapes.
    ///
    /// This is the invalid-argument case: the caller handed in something
    /// that does not describe a color.
    #[error("cannot parse color from '{input}': {reason}")]
    Parse {
        /// Offending input, as received
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// `Color3::name()` form naming a constant that does not exist.
    #[error("unknown color constant: {0}")]
    UnknownConstant(String),

    /// I/O error while reading or writing the binary layout.
    ///
    /// A truncated stream shows up here as
    /// [`std::io::ErrorKind::UnexpectedEof`].
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the input could not be understood as a color.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::UnknownConstant(_))
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
