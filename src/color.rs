//! RGB colors, HSL adjustments, and the base palette.
//!
//! Adjustments are relative to the current HSL channel, so `lighten(0.2)` on a
//! color with 50% lightness yields 60%. Channels are clamped to `0..=1` after
//! every step; no adjustment can fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color `{0}` (expected #RRGGBB, #RGB or rgb(r, g, b))")]
    Invalid(String),
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Opaque 8-bit RGB color. Serializes as a CSS `rgb(r, g, b)` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h_deg: f64, // 0..360
    pub s: f64,     // 0..1
    pub l: f64,     // 0..1
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsl(self) -> Hsl {
        let (r, g, b) = (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        );
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl { h_deg: 0.0, s: 0.0, l };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let hue = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let h_deg = if hue < 0.0 { hue + 360.0 } else { hue };

        Hsl {
            h_deg,
            s: clamp01(s),
            l,
        }
    }

    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h_deg.rem_euclid(360.0) / 360.0;
        let s = clamp01(hsl.s);
        let l = clamp01(hsl.l);

        if s == 0.0 {
            let v = to_channel(l);
            return Self::rgb(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        }

        Self::rgb(
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Hue angle in degrees (0 for grays).
    pub fn hue(self) -> f64 {
        self.to_hsl().h_deg
    }

    pub fn saturate(self, amount: f64) -> Self {
        self.adjust(amount, |hsl, a| hsl.s += hsl.s * a)
    }

    pub fn desaturate(self, amount: f64) -> Self {
        self.adjust(amount, |hsl, a| hsl.s -= hsl.s * a)
    }

    pub fn lighten(self, amount: f64) -> Self {
        self.adjust(amount, |hsl, a| hsl.l += hsl.l * a)
    }

    pub fn darken(self, amount: f64) -> Self {
        self.adjust(amount, |hsl, a| hsl.l -= hsl.l * a)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    fn adjust(self, amount: f64, step: impl FnOnce(&mut Hsl, f64)) -> Self {
        let amount = if amount.is_nan() { 0.0 } else { clamp01(amount) };
        let mut hsl = self.to_hsl();
        step(&mut hsl, amount);
        hsl.s = clamp01(hsl.s);
        hsl.l = clamp01(hsl.l);
        Self::from_hsl(hsl)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let invalid = || ColorError::Invalid(s.to_string());

        if let Some(hex) = t.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(invalid());
            }
            let byte = |i: usize, w: usize| {
                u8::from_str_radix(&hex[i..i + w], 16)
                    .map(|v| if w == 1 { v * 17 } else { v })
                    .map_err(|_| invalid())
            };
            return match hex.len() {
                6 => Ok(Self::rgb(byte(0, 2)?, byte(2, 2)?, byte(4, 2)?)),
                3 => Ok(Self::rgb(byte(0, 1)?, byte(1, 1)?, byte(2, 1)?)),
                _ => Err(invalid()),
            };
        }

        let inner = t
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let channels: Vec<u8> = inner
            .split(',')
            .map(|c| c.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<_, _>>()?;
        match channels.as_slice() {
            [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
pub const OFFICE10: [Color; 10] = [
    Color::rgb(68, 114, 196),  // blue      (#4472C4)
    Color::rgb(237, 125, 49),  // orange    (#ED7D31)
    Color::rgb(165, 165, 165), // gray      (#A5A5A5)
    Color::rgb(255, 192, 0),   // gold      (#FFC000)
    Color::rgb(91, 155, 213),  // light blue(#5B9BD5)
    Color::rgb(112, 173, 71),  // green     (#70AD47)
    Color::rgb(38, 68, 120),   // dark blue (#264478)
    Color::rgb(158, 72, 14),   // dark org. (#9E480E)
    Color::rgb(99, 99, 99),    // dark gray (#636363)
    Color::rgb(153, 115, 0),   // brownish  (#997300)
];

/// Ordered, non-empty list of base colors. Indices wrap around.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette(Vec<Color>);

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, ColorError> {
        if colors.is_empty() {
            return Err(ColorError::EmptyPalette);
        }
        Ok(Self(colors))
    }

    pub fn office() -> Self {
        Self(OFFICE10.to_vec())
    }

    /// Parse a comma- or semicolon-separated color list, e.g. `#4472C4,#ED7D31`.
    pub fn parse_list(s: &str) -> Result<Self, ColorError> {
        let colors = s
            .split([',', ';'])
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Color>, _>>()?;
        Self::new(colors)
    }

    #[inline]
    pub fn pick(&self, idx: usize) -> Color {
        self.0[idx % self.0.len()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A palette is never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::office()
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = ColorError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(p: Palette) -> Self {
        p.0
    }
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

fn to_channel(v: f64) -> u8 {
    (clamp01(v) * 255.0).round() as u8
}
