//! RGBA colors and the brightness correction used for stacked laps.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::GaugeError;

/// Color representation for gauge elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// The "unset" sentinel.
    pub const EMPTY: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const GRAY: Color = Color::new(0x80, 0x80, 0x80);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// `#rrggbb`, used by backends that carry opacity separately.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 fraction.
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Color {
    type Err = GaugeError;

    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`; the `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GaugeError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..=i], 16)
                .map(|n| n * 0x11)
                .map_err(|_| invalid())
        };

        match hex.len() {
            3 => Ok(Color::new(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Color::new(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = GaugeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Darkens (negative factor) or lightens (positive factor) a color.
///
/// The factor is clamped to `[-1, 1]`. Negative factors scale every RGB
/// channel by `1 + factor`, positive ones move each channel toward white by
/// `factor` of the remaining distance. Alpha is left untouched.
pub fn change_brightness(color: Color, factor: f32) -> Color {
    if factor.is_nan() {
        return color;
    }
    let factor = factor.clamp(-1.0, 1.0);
    let adjust = |channel: u8| -> u8 {
        let c = f32::from(channel);
        let corrected = if factor < 0.0 {
            c * (1.0 + factor)
        } else {
            (255.0 - c).mul_add(factor, c)
        };
        corrected.round().clamp(0.0, 255.0) as u8
    };

    Color::rgba(adjust(color.r), adjust(color.g), adjust(color.b), color.a)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
