//! Fixed binary layout for [`Color3`].
//!
//! A color is written as three consecutive IEEE-754 `f32` values in
//! `r, g, b` order: 12 bytes, no header, no length prefix, no version.
//! Byte order is chosen by the caller through [`Endian`].
//!
//! ```text
//! offset  0      4      8      12
//!         | r    | g    | b    |
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma3_core::{Color3, Endian};
//!
//! let mut buf = Vec::new();
//! Color3::ORANGE.serialize(&mut buf, Endian::Little)?;
//! assert_eq!(buf.len(), Color3::SERIALIZED_SIZE);
//!
//! let back = Color3::read_from(&mut buf.as_slice(), Endian::Little)?;
//! assert_eq!(back, Color3::ORANGE);
//! # Ok::<(), chroma3_core::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`byteorder`] - endian-aware `f32` reads and writes

use crate::{Color3, Result};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use tracing::trace;

/// Byte order of the serialized channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endian {
    /// Byte order of the running host.
    #[inline]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }
}

impl std::str::FromStr for Endian {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(Self::Little),
            "big" | "be" => Ok(Self::Big),
            "native" | "host" => Ok(Self::native()),
            _ => Err(crate::Error::parse(s, "expected 'little', 'big' or 'native'")),
        }
    }
}

impl Color3 {
    /// Size in bytes of the binary layout.
    pub const SERIALIZED_SIZE: usize = 12;

    /// Writes the three channels to `out`.
    pub fn serialize<W: Write>(&self, out: &mut W, endian: Endian) -> Result<()> {
        trace!(r = self.r, g = self.g, b = self.b, ?endian, "Color3::serialize");
        match endian {
            Endian::Little => {
                for v in self.to_array() {
                    out.write_f32::<LittleEndian>(v)?;
                }
            }
            Endian::Big => {
                for v in self.to_array() {
                    out.write_f32::<BigEndian>(v)?;
                }
            }
        }
        Ok(())
    }

    /// Overwrites `self` with three channels read from `input`.
    ///
    /// On error `self` is left unchanged.
    pub fn deserialize<R: Read>(&mut self, input: &mut R, endian: Endian) -> Result<()> {
        *self = Self::read_from(input, endian)?;
        Ok(())
    }

    /// Reads a color from `input`.
    ///
    /// A stream shorter than [`SERIALIZED_SIZE`](Self::SERIALIZED_SIZE)
    /// fails with [`std::io::ErrorKind::UnexpectedEof`].
    pub fn read_from<R: Read>(input: &mut R, endian: Endian) -> Result<Self> {
        let mut ch = [0.0f32; 3];
        match endian {
            Endian::Little => input.read_f32_into::<LittleEndian>(&mut ch)?,
            Endian::Big => input.read_f32_into::<BigEndian>(&mut ch)?,
        }
        let c = Self::from_array(ch);
        trace!(r = c.r, g = c.g, b = c.b, ?endian, "Color3::read_from");
        Ok(c)
    }
}
