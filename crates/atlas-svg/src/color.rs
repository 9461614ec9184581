//! SVG color values.
//!
//! A color is either a named string (`"white"`, `"none"`) or an RGB triple
//! with optional alpha.  The alpha-present form renders as `rgba(...)`,
//! otherwise `rgb(...)`.
//!
//! In render-settings documents a color appears as either a JSON string or
//! a 3/4-element array, so `Deserialize` is hand-written over both shapes.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// A named SVG color, e.g. `"white"`.
    Named(String),
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
        alpha: Option<f64>,
    },
}

impl Color {
    pub fn named(name: impl Into<String>) -> Self {
        Color::Named(name.into())
    }

    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::Rgb {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Color::Rgb {
            red,
            green,
            blue,
            alpha: Some(alpha),
        }
    }
}

impl Default for Color {
    /// The SVG "no paint" value.
    fn default() -> Self {
        Color::Named("none".to_string())
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(name) => f.write_str(name),
            Color::Rgb {
                red,
                green,
                blue,
                alpha: None,
            } => write!(f, "rgb({red},{green},{blue})"),
            Color::Rgb {
                red,
                green,
                blue,
                alpha: Some(alpha),
            } => write!(f, "rgba({red},{green},{blue},{alpha})"),
        }
    }
}

// ── Deserialization ───────────────────────────────────────────────────────────

struct ColorVisitor;

impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a color name or an [r, g, b] / [r, g, b, a] array")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Color, E> {
        Ok(Color::Named(value.to_string()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Color, A::Error> {
        let red = seq
            .next_element::<u8>()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let green = seq
            .next_element::<u8>()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let blue = seq
            .next_element::<u8>()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        let alpha = seq.next_element::<f64>()?;
        Ok(Color::Rgb {
            red,
            green,
            blue,
            alpha,
        })
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        deserializer.deserialize_any(ColorVisitor)
    }
}
