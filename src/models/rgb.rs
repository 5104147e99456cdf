//! RGB color handling with hex parsing, HSL conversion and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PaletteError, PaletteResult};

/// Fully opaque RGB color.
///
/// Serializes as an uppercase `"#RRGGBB"` string, so a `Vec<RgbColor>` is
/// written as a plain JSON array of hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// Hue/saturation/lightness triple.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness are percentages `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f32,
    /// Saturation percentage
    pub s: f32,
    /// Lightness percentage
    pub l: f32,
}

impl Hsl {
    /// Creates an HSL value, wrapping the hue into `[0, 360)` and clamping the percentages.
    #[must_use]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }
}

impl RgbColor {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    #[must_use]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use paleta::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    pub fn from_hex(hex: &str) -> PaletteResult<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidColor(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| PaletteError::InvalidColor(hex.to_string()))?;

        Ok(Self::from_u24(value))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use paleta::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a crossterm color for terminal rendering.
    #[must_use]
    pub const fn to_terminal_color(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Shifts every channel by `amount`, clamping each to `[0, 255]`.
    ///
    /// Clamping is lossy: shifting by `+d` and then `-d` only restores the
    /// original when no channel hit a bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use paleta::models::RgbColor;
    ///
    /// let color = RgbColor::new(250, 100, 5);
    /// assert_eq!(color.shift(20), RgbColor::new(255, 120, 25));
    /// assert_eq!(color.shift(20).shift(-20), RgbColor::new(235, 100, 5));
    /// ```
    #[must_use]
    pub fn shift(&self, amount: i16) -> Self {
        let channel = |c: u8| (i16::from(c) + amount).clamp(0, 255) as u8;
        Self {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }

    /// Creates an `RgbColor` from HSL, rounding each channel to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use paleta::models::{Hsl, RgbColor};
    ///
    /// assert_eq!(RgbColor::from_hsl(Hsl::new(0.0, 100.0, 50.0)), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::from_hsl(Hsl::new(120.0, 70.0, 50.0)), RgbColor::new(38, 217, 38));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard color model uses single-char names
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0);
        let s = (hsl.s / 100.0).clamp(0.0, 1.0);
        let l = (hsl.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let to_channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }

    /// Converts the color to HSL. Grayscale colors report hue 0.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_hsl(&self) -> Hsl {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        Hsl::new(h, s * 100.0, l * 100.0)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::WHITE);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("+12345").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(RgbColor::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_from_u24_ignores_high_bits() {
        assert_eq!(RgbColor::from_u24(0xFF12_3456), RgbColor::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let colors = vec![RgbColor::new(255, 0, 0), RgbColor::new(0, 0, 10)];
        let json = serde_json::to_string(&colors).unwrap();
        assert_eq!(json, r##"["#FF0000","#00000A"]"##);

        let parsed: Vec<RgbColor> = serde_json::from_str(r##"["#ff0000","00000a"]"##).unwrap();
        assert_eq!(parsed, colors);

        assert!(serde_json::from_str::<Vec<RgbColor>>(r#"["nope"]"#).is_err());
    }

    #[test]
    fn test_shift_clamps() {
        let color = RgbColor::new(10, 128, 250);
        assert_eq!(color.shift(0), color);
        assert_eq!(color.shift(20), RgbColor::new(30, 148, 255));
        assert_eq!(color.shift(-20), RgbColor::new(0, 108, 230));
        assert_eq!(color.shift(300), RgbColor::WHITE);
        assert_eq!(color.shift(-300), RgbColor::BLACK);
    }

    #[test]
    fn test_shift_is_lossy_after_clamping() {
        let color = RgbColor::new(250, 10, 128);
        let restored = color.shift(40).shift(-40);
        assert_ne!(restored, color);
        assert_eq!(restored, RgbColor::new(215, 10, 128));
    }

    #[test]
    fn test_hsl_to_rgb_primary_colors() {
        assert_eq!(RgbColor::from_hsl(Hsl::new(0.0, 100.0, 50.0)), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hsl(Hsl::new(120.0, 100.0, 50.0)), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from_hsl(Hsl::new(240.0, 100.0, 50.0)), RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_to_rgb_harmony_defaults() {
        // 70% saturation, 50% lightness
        assert_eq!(RgbColor::from_hsl(Hsl::new(0.0, 70.0, 50.0)), RgbColor::new(217, 38, 38));
        assert_eq!(RgbColor::from_hsl(Hsl::new(240.0, 70.0, 50.0)), RgbColor::new(38, 38, 217));
    }

    #[test]
    fn test_hsl_grayscale() {
        assert_eq!(RgbColor::from_hsl(Hsl::new(0.0, 0.0, 0.0)), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hsl(Hsl::new(0.0, 0.0, 100.0)), RgbColor::WHITE);
        assert_eq!(RgbColor::from_hsl(Hsl::new(180.0, 0.0, 50.0)), RgbColor::new(128, 128, 128));

        let hsl = RgbColor::new(128, 128, 128).to_hsl();
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
    }

    #[test]
    fn test_hsl_wraps_hue() {
        assert_eq!(Hsl::new(390.0, 50.0, 50.0).h, 30.0);
        assert_eq!(Hsl::new(-30.0, 50.0, 50.0).h, 330.0);
        assert_eq!(
            RgbColor::from_hsl(Hsl::new(360.0, 100.0, 50.0)),
            RgbColor::new(255, 0, 0)
        );
    }

    #[test]
    fn test_hsl_roundtrip_hue() {
        for hue in (0..360).step_by(7) {
            let color = RgbColor::from_hsl(Hsl::new(hue as f32, 70.0, 50.0));
            let back = color.to_hsl();
            assert!(
                hue_distance(back.h, hue as f32) < 1.0,
                "hue {} came back as {}",
                hue,
                back.h
            );
            assert!((back.s - 70.0).abs() < 1.0);
            assert!((back.l - 50.0).abs() < 1.0);
        }
    }
}
