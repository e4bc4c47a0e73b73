//! Hue/saturation/brightness colors and the two-color schemes fed to the
//! color mapper.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A color in HSB space.
///
/// `hue` is in degrees and is cyclic: values outside `[0, 360)` are legal and
/// wrap when converted to RGB. `saturation` and `brightness` are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsbColor {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl HsbColor {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(0.0, 0.0, 1.0);
    pub const RED: Self = Self::new(0.0, 1.0, 1.0);
    pub const BLUE: Self = Self::new(240.0, 1.0, 1.0);

    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Convert 8-bit RGB to HSB.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        let (r, g, b) = (r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max > 0.0 { delta / max } else { 0.0 };
        if saturation == 0.0 {
            return Self::new(0.0, 0.0, max);
        }

        let rc = (max - r) / delta;
        let gc = (max - g) / delta;
        let bc = (max - b) / delta;
        let sector = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        Self::new((sector * 60.0).rem_euclid(360.0), saturation, max)
    }

    /// Parse `rrggbb`, with or without a leading `#`.
    pub fn from_hex(input: &str) -> crate::Result<Self> {
        let invalid = || CoreError::InvalidColor {
            input: input.to_string(),
        };
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Hue folded into `[0, 360)`. Non-finite hues fold to `0`.
    pub fn wrapped_hue(&self) -> f64 {
        if !self.hue.is_finite() {
            return 0.0;
        }
        let h = self.hue.rem_euclid(360.0);
        // rem_euclid can round up to the modulus for tiny negative inputs.
        if h >= 360.0 {
            0.0
        } else {
            h
        }
    }

    /// Convert to 8-bit RGB using the hexcone model.
    pub fn to_rgb8(&self) -> [u8; 3] {
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);
        if s == 0.0 {
            let g = to_channel(v);
            return [g, g, g];
        }

        let h = self.wrapped_hue() / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        [to_channel(r), to_channel(g), to_channel(b)]
    }

    /// Opaque RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let [r, g, b] = self.to_rgb8();
        [r, g, b, 255]
    }
}

#[inline]
fn to_channel(x: f64) -> u8 {
    (x * 255.0).round() as u8
}

/// The two user-picked colors plus the coloring mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Color of fast-escaping points (gradient start, psychedelic base hue).
    pub color1: HsbColor,
    /// Color of points near the set boundary (gradient end).
    pub color2: HsbColor,
    /// Banded "psychedelic" hues instead of the linear gradient.
    #[serde(default)]
    pub psychedelic: bool,
}

impl ColorScheme {
    /// Red to blue gradient.
    pub fn gradient() -> Self {
        Self {
            color1: HsbColor::RED,
            color2: HsbColor::BLUE,
            psychedelic: false,
        }
    }

    /// Pale-blue bands; color 2 is unused in this mode.
    pub fn psychedelic() -> Self {
        Self {
            color1: HsbColor::from_rgb8(0x99, 0xb3, 0xff),
            color2: HsbColor::WHITE,
            psychedelic: true,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::gradient()
    }
}
