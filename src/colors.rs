//! Colours and ARGB8888 packing.
//!
//! Overlay colours carry alpha, since in-scene path fills are drawn
//! translucent over the scene. Pixels in the [`PixelCanvas`] are stored as
//! packed ARGB8888 `u32`s, the texture format SDL2 streams to the window.
//!
//! [`PixelCanvas`]: crate::render::PixelCanvas

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Sandbox background behind the overlays.
pub const BACKGROUND: u32 = 0xFF1E1E1E;
/// Sandbox grid lines.
pub const GRID: u32 = 0xFF333333;

/// An sRGB colour with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Same colour at half the alpha, rounding down.
    pub const fn half_alpha(self) -> Self {
        self.with_alpha(self.a / 2)
    }

    pub const fn to_argb(self) -> u32 {
        pack_argb(self.r, self.g, self.b, self.a)
    }

    pub const fn from_argb(argb: u32) -> Self {
        let (r, g, b, a) = unpack_argb(argb);
        Self { r, g, b, a }
    }

    /// Composites this colour over an opaque destination pixel.
    pub fn blend_over(self, dst: u32) -> u32 {
        match self.a {
            255 => self.to_argb(),
            0 => dst,
            alpha => {
                let (dr, dg, db, _) = unpack_argb(dst);
                let a = alpha as u32;
                let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
                pack_argb(mix(self.r, dr), mix(self.g, dg), mix(self.b, db), 255)
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour {0:?}, expected #RRGGBB or #RRGGBBAA")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(err());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[inline]
pub const fn pack_argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub const fn unpack_argb(argb: u32) -> (u8, u8, u8, u8) {
    (
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!("#FF8000".parse::<Color>(), Ok(Color::rgb(255, 128, 0)));
        assert_eq!("#00ff0080".parse::<Color>(), Ok(Color::rgba(0, 255, 0, 128)));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["FF0000", "#FF00", "#GG0000", "#FF0000FFAA"] {
            assert!(bad.parse::<Color>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_string().parse::<Color>(), Ok(c));
    }

    #[test]
    fn half_alpha_rounds_down() {
        assert_eq!(Color::rgba(9, 9, 9, 255).half_alpha().a, 127);
        assert_eq!(Color::rgba(9, 9, 9, 1).half_alpha().a, 0);
    }

    #[test]
    fn blend_half_white_over_black() {
        let out = Color::WHITE.with_alpha(128).blend_over(Color::BLACK.to_argb());
        assert_eq!(unpack_argb(out), (128, 128, 128, 255));
    }

    #[test]
    fn opaque_blend_replaces() {
        assert_eq!(Color::RED.blend_over(BACKGROUND), 0xFFFF0000);
    }
}
