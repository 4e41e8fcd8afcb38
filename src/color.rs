//! Color representations and the exact conversions between them.
//!
//! [`Rgb`] is the only type the aggregation and ranking stages handle. [`Hex`] and
//! [`Hsl`] are derived from it once, at the output boundary, through
//! [`ColorFormat::render`].

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{ColorError, Result};

/// An 8-bit sRGB triplet. Serializes as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Build a color from wide integers, rejecting any component outside `0..=255`.
    pub fn from_components(red: i64, green: i64, blue: i64) -> Result<Self> {
        let channel = |name: &'static str, value: i64| {
            u8::try_from(value).map_err(|_| ColorError::invalid_argument(name, value))
        };
        Ok(Self::new(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }

    /// Parse `#rrggbb` or `rrggbb`, in either case.
    pub fn from_hex(input: &str) -> Result<Self> {
        let hex = input.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_argument("hex", input));
        }
        let pair = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::invalid_argument("hex", input))
        };
        Ok(Self::new(pair(0..2)?, pair(2..4)?, pair(4..6)?))
    }

    pub fn to_hex(self) -> Hex {
        rgb_to_hex(self)
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.red, rgb.green, rgb.blue]
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(rgb: Rgb) -> Self {
        Srgb::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// A `#rrggbb` string with lowercase digits. Only obtainable from an [`Rgb`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Hex(String);

impl Hex {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hue in degrees `0..360`, saturation and lightness in percent `0..=100`.
/// Serializes as `[h, s, l]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[u16; 3]")]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl From<Hsl> for [u16; 3] {
    fn from(hsl: Hsl) -> Self {
        [hsl.hue, hsl.saturation.into(), hsl.lightness.into()]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

pub fn rgb_to_hex(rgb: Rgb) -> Hex {
    Hex(format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue))
}

/// Convert to HSL, rounding each component half-up to the nearest integer.
///
/// When several channels share the maximum, the hue sector is taken from the
/// first of red, green, blue that matches. A hue that rounds up to 360 wraps to 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.red) / 255.0;
    let g = f64::from(rgb.green) / 255.0;
    let b = f64::from(rgb.blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if delta == 0.0 {
        // achromatic
        (0.0, 0.0)
    } else {
        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (sector / 6.0, saturation)
    };

    Hsl {
        hue: ((hue * 360.0).round() as u16) % 360,
        saturation: (saturation * 100.0).round().min(100.0) as u8,
        lightness: (lightness * 100.0).round() as u8,
    }
}

/// Output representation requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Rgb,
    Hex,
    Hsl,
}

impl ColorFormat {
    pub fn render(self, rgb: Rgb) -> Color {
        match self {
            ColorFormat::Rgb => Color::Rgb(rgb),
            ColorFormat::Hex => Color::Hex(rgb_to_hex(rgb)),
            ColorFormat::Hsl => Color::Hsl(rgb_to_hsl(rgb)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hex => "hex",
            ColorFormat::Hsl => "hsl",
        }
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorFormat::Rgb),
            "hex" => Ok(ColorFormat::Hex),
            "hsl" => Ok(ColorFormat::Hsl),
            _ => Err(ColorError::invalid_argument("color_format", s)),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted color, shaped by the [`ColorFormat`] it was rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Rgb(Rgb),
    Hex(Hex),
    Hsl(Hsl),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Color::Hex(hex) => fmt::Display::fmt(hex, f),
            Color::Hsl(hsl) => fmt::Display::fmt(hsl, f),
        }
    }
}
