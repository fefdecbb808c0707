//! HSL color type and hex conversions.
//!
//! Hue is in degrees (0-360), saturation and lightness are percentages
//! (0-100). Conversions from hex round each component to the nearest
//! integer so palettes serialize identically across platforms.

use serde::{Deserialize, Serialize};

/// A color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Rotates the hue by `degrees`, wrapping into [0, 360).
    pub fn rotate(&self, degrees: f64) -> Hsl {
        Hsl {
            h: (self.h + degrees).rem_euclid(360.0),
            s: self.s,
            l: self.l,
        }
    }

    /// Parses a `#rgb` or `#rrggbb` color.
    pub fn from_hex(hex: &str) -> Option<Hsl> {
        Rgb::from_hex(hex).map(|rgb| rgb.to_hsl())
    }

    /// Formats as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        Rgb::from_hsl(self).to_hex()
    }
}

/// Parses a hex color into HSL. See [`Hsl::from_hex`].
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    Hsl::from_hex(hex)
}

/// Formats an HSL color as `#rrggbb`. See [`Hsl::to_hex`].
pub fn hsl_to_hex(hsl: &Hsl) -> String {
    hsl.to_hex()
}

/// Returns true if `hex` parses as a `#rgb` or `#rrggbb` color.
pub fn is_hex_color(hex: &str) -> bool {
    Rgb::from_hex(hex).is_some()
}

/// RGB color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let (r, g, b) = match digits.len() {
            3 => {
                let expand = |i: usize| u8::from_str_radix(&digits[i..i + 1].repeat(2), 16).ok();
                (expand(0)?, expand(1)?, expand(2)?)
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                (byte(0)?, byte(2)?, byte(4)?)
            }
            _ => return None,
        };
        Some(Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    fn to_hex(self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    fn to_hsl(self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta < 1e-10 {
            return Hsl::new(0.0, 0.0, (l * 100.0).round());
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };

        Hsl::new(
            (h * 60.0).round().rem_euclid(360.0),
            (s * 100.0).round(),
            (l * 100.0).round(),
        )
    }

    fn from_hsl(hsl: &Hsl) -> Self {
        let h = hsl.h.rem_euclid(360.0);
        let s = (hsl.s / 100.0).clamp(0.0, 1.0);
        let l = (hsl.l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match (h / 60.0).floor() as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self {
            r: r + m,
            g: g + m,
            b: b + m,
        }
    }
}
