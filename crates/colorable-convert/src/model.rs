// SPDX-License-Identifier: MIT
//
// Validated color values.
//
// `Rgb` and `Hsb` only ever hold in-range channels: the converter builds
// them through its validators, and the `const fn new` constructors are for
// literal tables (the catalog) where the ranges are known at compile time.
// Raw caller input travels as `[i32; 3]` so that out-of-range values like
// `-1` or `256` can be expressed and rejected.

use std::fmt;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An additive red/green/blue color, each channel `0..=255`.
///
/// Ordering is lexicographic over `(r, g, b)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as a `[r, g, b]` array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The channels widened to the converter's raw input form.
    #[inline]
    #[must_use]
    pub fn triple(self) -> [i32; 3] {
        self.to_array().map(i32::from)
    }

    /// Smallest and largest channel.
    #[inline]
    #[must_use]
    pub fn min_max(self) -> (u8, u8) {
        let min = self.r.min(self.g).min(self.b);
        let max = self.r.max(self.g).max(self.b);
        (min, max)
    }
}

impl From<Rgb> for [i32; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.triple()
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── Hsb ─────────────────────────────────────────────────────────────────────

/// A hue/saturation/brightness color (HSV), in degrees and percent.
///
/// - `hue`: `0..360` as produced by the converter; `360` is accepted on
///   input and means the same as `0`.
/// - `sat`: `0..=100`.
/// - `bright`: `0..=100`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hsb {
    pub hue: u16,
    pub sat: u8,
    pub bright: u8,
}

impl Hsb {
    #[inline]
    #[must_use]
    pub const fn new(hue: u16, sat: u8, bright: u8) -> Self {
        Self { hue, sat, bright }
    }

    /// The components widened to the converter's raw input form.
    #[inline]
    #[must_use]
    pub fn triple(self) -> [i32; 3] {
        [
            i32::from(self.hue),
            i32::from(self.sat),
            i32::from(self.bright),
        ]
    }
}

impl From<Hsb> for [i32; 3] {
    fn from(hsb: Hsb) -> Self {
        hsb.triple()
    }
}

impl fmt::Debug for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.hue, self.sat, self.bright)
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
