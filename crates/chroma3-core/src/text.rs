//! Textual form of [`Color3`].
//!
//! [`Display`](std::fmt::Display) writes `Color3(r, g, b)` with the shortest
//! representation that reads back to the same `f32`, so
//! `c.to_string().parse::<Color3>()` returns `c` bit for bit (NaN aside,
//! which never compares equal).
//!
//! # Accepted forms
//!
//! ```text
//! Color3(0.5, 0.25, 1)          three channels
//! Color3(0.5)                   broadcast to all channels
//! Color3::fromARGB(0xFF8000)    packed 8-bit, see Color3::from_argb
//! Color3::fromASRGB(0xFF8000)   packed 8-bit sRGB, see Color3::from_asrgb
//! Color3{r = 1, g = 0, b = 0}   named fields, any order; ':' also accepted
//! Color3::one()                 any named constant: zero, one, red, ...
//! ```
//!
//! The type name may be any of the radiometric aliases as well
//! (`Power3(1, 0, 0)`, `Radiance3::zero()`, ...). Whitespace is free and a
//! single trailing `;` is ignored. Numbers use Rust float syntax, including
//! `inf`, `-inf` and `NaN`.

use crate::{Color3, Error, Result};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Type names accepted in front of a textual color.
pub const TYPE_NAMES: [&str; 7] = [
    "Color3",
    "Power3",
    "Radiance3",
    "Irradiance3",
    "Biradiance3",
    "Radiosity3",
    "Energy3",
];

impl Color3 {
    /// Parses one of the accepted textual forms.
    ///
    /// ```rust
    /// use chroma3_core::Color3;
    ///
    /// assert_eq!(Color3::parse("Color3(1, 0, 0)")?, Color3::RED);
    /// assert_eq!(Color3::parse("Power3(0.5)")?, Color3::splat(0.5));
    /// assert_eq!(Color3::parse("Color3::fromARGB(0x0000FF)")?, Color3::BLUE);
    /// assert_eq!(Color3::parse("Color3{b = 0, r = 1, g = 1}")?, Color3::YELLOW);
    /// assert_eq!(Color3::parse("Color3::one()")?, Color3::ONE);
    /// # Ok::<(), chroma3_core::Error>(())
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        Parser::new(s).color()
    }
}

impl FromStr for Color3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "Color3({:.*}, {:.*}, {:.*})", p, self.r, p, self.g, p, self.b),
            None => write!(f, "Color3({}, {}, {})", self.r, self.g, self.b),
        }
    }
}

struct Parser<'a> {
    src: &'a str,
    rest: &'a str,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, rest: src }
    }

    fn fail(&self, reason: impl Into<String>) -> Error {
        let reason = reason.into();
        debug!(input = self.src, %reason, "rejected color text");
        Error::parse(self.src, reason)
    }

    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn eat(&mut self, tok: &str) -> bool {
        self.skip_ws();
        match self.rest.strip_prefix(tok) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn expect(&mut self, tok: &str) -> Result<()> {
        if self.eat(tok) {
            Ok(())
        } else {
            Err(self.fail(format!("expected '{tok}'")))
        }
    }

    fn ident(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let end = self
            .rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(self.rest.len());
        if end == 0 || self.rest.as_bytes()[0].is_ascii_digit() {
            return None;
        }
        let (id, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(id)
    }

    /// Maximal run of number-ish characters. A sign is allowed up front
    /// and right after an exponent marker.
    fn number_token(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let bytes = self.rest.as_bytes();
        let mut end = 0;
        while end < bytes.len() {
            let c = bytes[end];
            let sign_ok = (c == b'+' || c == b'-')
                && (end == 0 || matches!(bytes[end - 1], b'e' | b'E'));
            if !(c.is_ascii_alphanumeric() || c == b'.' || c == b'_' || sign_ok) {
                break;
            }
            end += 1;
        }
        if end == 0 {
            return None;
        }
        let (tok, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(tok)
    }

    fn number(&mut self) -> Result<f32> {
        let tok = self
            .number_token()
            .ok_or_else(|| self.fail("expected a number"))?;
        tok.parse::<f32>()
            .map_err(|_| self.fail(format!("invalid number '{tok}'")))
    }

    fn integer(&mut self) -> Result<u32> {
        let tok = self
            .number_token()
            .ok_or_else(|| self.fail("expected an integer"))?;
        let digits = tok.replace('_', "");
        let parsed = match digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => digits.parse::<u32>(),
        };
        parsed.map_err(|_| self.fail(format!("invalid 32-bit integer '{tok}'")))
    }

    fn color(mut self) -> Result<Color3> {
        let name = self
            .ident()
            .ok_or_else(|| self.fail("expected a type name such as 'Color3'"))?;
        if !TYPE_NAMES.contains(&name) {
            return Err(self.fail(format!("unknown type '{name}'")));
        }

        let c = if self.eat("::") {
            self.static_call()?
        } else if self.eat("(") {
            self.body(")")?
        } else if self.eat("{") {
            self.body("}")?
        } else {
            return Err(self.fail("expected '(', '{' or '::' after the type name"));
        };

        self.eat(";");
        self.skip_ws();
        if !self.rest.is_empty() {
            return Err(self.fail(format!("unexpected trailing input '{}'", self.rest)));
        }
        Ok(c)
    }

    fn static_call(&mut self) -> Result<Color3> {
        let func = self
            .ident()
            .ok_or_else(|| self.fail("expected a function name after '::'"))?;
        self.expect("(")?;
        let c = match func {
            "fromARGB" => Color3::from_argb(self.integer()?),
            "fromASRGB" => Color3::from_asrgb(self.integer()?),
            name => match Color3::named(name) {
                Some(c) => c,
                None => {
                    debug!(input = self.src, name, "unknown color constant");
                    return Err(Error::UnknownConstant(name.to_string()));
                }
            },
        };
        self.expect(")")?;
        Ok(c)
    }

    /// Contents of `( ... )` or `{ ... }`: positional channels or named
    /// fields, told apart by an `=`/`:` after the first identifier.
    fn body(&mut self, close: &str) -> Result<Color3> {
        let start = self.rest;
        let named = self.ident().is_some() && {
            self.skip_ws();
            self.rest.starts_with('=') || self.rest.starts_with(':')
        };
        self.rest = start;
        if named {
            return self.fields(close);
        }

        let mut vals = Vec::with_capacity(3);
        loop {
            vals.push(self.number()?);
            if !self.eat(",") {
                break;
            }
        }
        self.expect(close)?;
        match vals[..] {
            [v] => Ok(Color3::splat(v)),
            [r, g, b] => Ok(Color3::new(r, g, b)),
            _ => Err(self.fail(format!("expected 1 or 3 values, found {}", vals.len()))),
        }
    }

    fn fields(&mut self, close: &str) -> Result<Color3> {
        let mut ch: [Option<f32>; 3] = [None; 3];
        loop {
            if self.eat(close) {
                break;
            }
            let name = self
                .ident()
                .ok_or_else(|| self.fail("expected a field name"))?;
            let idx = match name {
                "r" => 0,
                "g" => 1,
                "b" => 2,
                _ => return Err(self.fail(format!("unknown field '{name}'"))),
            };
            if !(self.eat("=") || self.eat(":")) {
                return Err(self.fail(format!("expected '=' after '{name}'")));
            }
            let v = self.number()?;
            if ch[idx].replace(v).is_some() {
                return Err(self.fail(format!("duplicate field '{name}'")));
            }
            if !self.eat(",") {
                self.expect(close)?;
                break;
            }
        }
        match ch {
            [Some(r), Some(g), Some(b)] => Ok(Color3::new(r, g, b)),
            _ => Err(self.fail("fields r, g and b are all required")),
        }
    }
}
