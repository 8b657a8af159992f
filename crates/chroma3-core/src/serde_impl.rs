//! serde support (feature `serde`).
//!
//! Serializes as a struct `{ r, g, b }`. Human-readable formats get the
//! textual form instead when a channel is NaN or infinite, since JSON has no
//! spelling for those. Deserialization is lenient and
//! accepts every shape a config file is likely to use:
//!
//! ```yaml
//! key_light: { r: 1.0, g: 0.9, b: 0.8 }
//! fill: [0.2, 0.25, 0.3]
//! ambient: 0.05
//! rim: "Color3::fromARGB(0xFFCC88)"
//! bounce: "Radiance3(0.1, 0.1, 0.12)"
//! ```

use crate::Color3;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for Color3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.is_finite() && serializer.is_human_readable() {
            return serializer.collect_str(self);
        }
        let mut s = serializer.serialize_struct("Color3", 3)?;
        s.serialize_field("r", &self.r)?;
        s.serialize_field("g", &self.g)?;
        s.serialize_field("b", &self.b)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for Color3 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(Color3Visitor)
    }
}

struct Color3Visitor;

impl<'de> Visitor<'de> for Color3Visitor {
    type Value = Color3;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "a color as {r, g, b}, [r, g, b], a number, or a string like \"Color3(r, g, b)\"",
        )
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Color3, E> {
        Ok(Color3::splat(v as f32))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Color3, E> {
        Ok(Color3::splat(v as f32))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Color3, E> {
        Ok(Color3::splat(v as f32))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Color3, E> {
        Color3::parse(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Color3, A::Error> {
        let mut ch = [0.0f32; 3];
        for (i, slot) in ch.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &self));
        }
        Ok(Color3::from_array(ch))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Color3, A::Error> {
        let mut ch: [Option<f32>; 3] = [None; 3];
        while let Some(key) = map.next_key::<String>()? {
            let idx = match key.as_str() {
                "r" => 0,
                "g" => 1,
                "b" => 2,
                other => return Err(de::Error::unknown_field(other, &["r", "g", "b"])),
            };
            if ch[idx].replace(map.next_value()?).is_some() {
                return Err(de::Error::custom(format!("duplicate field `{key}`")));
            }
        }
        match ch {
            [Some(r), Some(g), Some(b)] => Ok(Color3::new(r, g, b)),
            [None, _, _] => Err(de::Error::missing_field("r")),
            [_, None, _] => Err(de::Error::missing_field("g")),
            _ => Err(de::Error::missing_field("b")),
        }
    }
}
