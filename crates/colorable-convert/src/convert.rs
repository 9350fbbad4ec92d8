// SPDX-License-Identifier: MIT
//
// Converter — name ↔ RGB ↔ HSB/HSV ↔ hex.
//
// Single-character variable names (r, g, b, h, s, v) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Every public conversion validates its input before doing any math, and
// every validator is public on its own. Floating point is used for the
// intermediate values; rounding happens once, on the final output, so
// errors don't compound between steps.
//
// Hue (RGB → HSB) is the circular hue:
//
//   hue = atan2(√3·(G − B), 2R − G − B)
//
// HSB → RGB walks the six 60° sectors of the hue hexagon:
//
//   [0,60)    → (255, ↑,   0)      [180,240) → (0,   ↓,   255)
//   [60,120)  → (↓,   255, 0)      [240,300) → (↑,   0,   255)
//   [120,180) → (0,   255, ↑)      [300,360] → (255, 0,   ↓)
//
// where ↑ ramps 0 → 255 across the sector and ↓ ramps 255 → 0.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog;
use crate::error::{ConvertError, Result};
use crate::model::{Hsb, Rgb};

/// `#RRGGBB`, either case.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

// ─── Names ───────────────────────────────────────────────────────────────────

/// Look up the RGB value of a catalog color by exact name.
///
/// # Errors
///
/// [`ConvertError::NameNotFound`] if the catalog has no such name.
pub fn name_to_rgb(name: &str) -> Result<Rgb> {
    catalog::lookup(name).ok_or_else(|| ConvertError::NameNotFound(name.to_owned()))
}

/// Find the catalog name of an RGB value.
///
/// Several names can share one RGB value; the first in catalog order wins.
/// Returns `Ok(None)` when the value is valid but unnamed.
///
/// # Errors
///
/// [`ConvertError::InvalidRgb`] if a channel is outside `0..=255`.
pub fn rgb_to_name(rgb: [i32; 3]) -> Result<Option<&'static str>> {
    let rgb = validate_rgb(rgb)?;
    Ok(catalog::reverse_lookup(rgb))
}

// ─── RGB ↔ HSB ───────────────────────────────────────────────────────────────

/// Convert RGB to HSB. See [`Rgb::to_hsb`].
///
/// # Errors
///
/// [`ConvertError::InvalidRgb`] if a channel is outside `0..=255`.
pub fn rgb_to_hsb(rgb: [i32; 3]) -> Result<Hsb> {
    Ok(validate_rgb(rgb)?.to_hsb())
}

/// Alias of [`rgb_to_hsb`] — HSV and HSB are the same model.
///
/// # Errors
///
/// See [`rgb_to_hsb`].
#[inline]
pub fn rgb_to_hsv(rgb: [i32; 3]) -> Result<Hsb> {
    rgb_to_hsb(rgb)
}

/// Convert HSB to RGB. See [`Hsb::to_rgb`].
///
/// # Errors
///
/// [`ConvertError::InvalidHsb`] if hue is outside `0..=360` or saturation or
/// brightness outside `0..=100`.
pub fn hsb_to_rgb(hsb: [i32; 3]) -> Result<Rgb> {
    Ok(validate_hsb(hsb)?.to_rgb())
}

/// Alias of [`hsb_to_rgb`].
///
/// # Errors
///
/// See [`hsb_to_rgb`].
#[inline]
pub fn hsv_to_rgb(hsv: [i32; 3]) -> Result<Rgb> {
    hsb_to_rgb(hsv)
}

/// RGB to HSL. Not implemented: validates the input, then always fails.
///
/// # Errors
///
/// [`ConvertError::InvalidRgb`] for a malformed input, otherwise
/// [`ConvertError::NotImplemented`].
pub fn rgb_to_hsl(rgb: [i32; 3]) -> Result<Hsb> {
    validate_rgb(rgb)?;
    Err(ConvertError::NotImplemented("rgb_to_hsl"))
}

// ─── RGB ↔ Hex ───────────────────────────────────────────────────────────────

/// Format RGB as `#RRGGBB` with uppercase digits.
///
/// # Errors
///
/// [`ConvertError::InvalidRgb`] if a channel is outside `0..=255`.
pub fn rgb_to_hex(rgb: [i32; 3]) -> Result<String> {
    Ok(validate_rgb(rgb)?.to_hex())
}

/// Parse `#RRGGBB` (either case) into RGB.
///
/// # Errors
///
/// [`ConvertError::InvalidHex`] unless the input is exactly `#` followed by
/// six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let hex = validate_hex(hex)?;
    let byte = |at: usize| {
        u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| ConvertError::InvalidHex(hex.clone()))
    };
    Ok(Rgb::new(byte(1)?, byte(3)?, byte(5)?))
}

// ─── Infallible conversions on validated values ─────────────────────────────

impl Rgb {
    /// HSB of this color.
    ///
    /// Pure black has saturation 0 (not a division by zero). Achromatic
    /// colors have hue 0.
    #[must_use]
    pub fn to_hsb(self) -> Hsb {
        let (r, g, b) = (f64::from(self.r), f64::from(self.g), f64::from(self.b));

        let y = 3.0_f64.sqrt() * (g - b);
        let x = 2.0f64.mul_add(r, -g) - b;
        let hue = normalize_hue(y.atan2(x).to_degrees());

        let (lo, hi) = self.min_max();
        let (min, max) = (f64::from(lo), f64::from(hi));
        let sat = if lo == 0 && hi == 0 {
            0.0
        } else {
            (max - min) / max * 100.0
        };

        let bright = max / 2.55;

        // 359.5° and up rounds onto 360°, which is 0° again.
        Hsb::new(to_u16(hue) % 360, to_u8(sat), to_u8(bright))
    }

    /// `#RRGGBB`, uppercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Hsb {
    /// RGB of this color.
    ///
    /// Builds the fully saturated, fully bright color for the hue, fades it
    /// toward white by `1 - sat/100`, then scales it by `bright/100`.
    /// Components past their range saturate at the nearest channel bound.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let hue = f64::from(self.hue);

        // Position within a sector, remapped from degrees onto 0..=255.
        let ramp = |start: f64| (hue - start) / 60.0 * 255.0;

        let pure = match self.hue {
            0..60 => [255.0, ramp(0.0), 0.0],
            60..120 => [255.0 - ramp(60.0), 255.0, 0.0],
            120..180 => [0.0, 255.0, ramp(120.0)],
            180..240 => [0.0, 255.0 - ramp(180.0), 255.0],
            240..300 => [ramp(240.0), 0.0, 255.0],
            _ => [255.0, 0.0, 255.0 - ramp(300.0)],
        };

        let fade = 1.0 - f64::from(self.sat) / 100.0;
        let scale = f64::from(self.bright) / 100.0;
        let [r, g, b] = pure.map(|v| to_u8((255.0 - v).mul_add(fade, v) * scale));

        Rgb::new(r, g, b)
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Check that every channel is within `0..=255`.
///
/// # Errors
///
/// [`ConvertError::InvalidRgb`] carrying the rejected input.
pub fn validate_rgb(rgb: [i32; 3]) -> Result<Rgb> {
    match rgb.map(u8::try_from) {
        [Ok(r), Ok(g), Ok(b)] => Ok(Rgb::new(r, g, b)),
        _ => Err(ConvertError::InvalidRgb(rgb)),
    }
}

/// Check hue within `0..=360` and saturation/brightness within `0..=100`.
///
/// # Errors
///
/// [`ConvertError::InvalidHsb`] carrying the rejected input.
pub fn validate_hsb(hsb: [i32; 3]) -> Result<Hsb> {
    let [hue, sat, bright] = hsb;
    match (u16::try_from(hue), u8::try_from(sat), u8::try_from(bright)) {
        (Ok(hue @ 0..=360), Ok(sat @ 0..=100), Ok(bright @ 0..=100)) => {
            Ok(Hsb::new(hue, sat, bright))
        }
        _ => Err(ConvertError::InvalidHsb(hsb)),
    }
}

/// Check the `#RRGGBB` form and return it uppercased.
///
/// # Errors
///
/// [`ConvertError::InvalidHex`] carrying the rejected input.
pub fn validate_hex(hex: &str) -> Result<String> {
    if HEX_RE.is_match(hex) {
        Ok(hex.to_ascii_uppercase())
    } else {
        Err(ConvertError::InvalidHex(hex.to_owned()))
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Round half away from zero into `0..=255`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Round half away from zero into `0..=360`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u16(v: f64) -> u16 {
    v.round().clamp(0.0, 360.0) as u16
}

// ─── Tests ───────────────────────────────────────────────────────────────────
