//! Color values — one color as name, RGB, and HSB at once.
//!
//! A [`Color`] is what a [`Colorset`](crate::Colorset) holds. It carries all
//! three representations (derived once, at construction) plus a [`Mode`]
//! that picks which one `Display` shows. Two colors are equal when their RGB
//! values are equal, whatever their names: "Aqua" and "Cyan" are the same
//! color.

use std::fmt;
use std::hash::{Hash, Hasher};

use colorable_convert::{self as convert, catalog, ConvertError, Hsb, Rgb};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which representation a color displays as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The catalog name (hex when unnamed).
    #[default]
    Name,
    /// `rgb(r, g, b)`.
    Rgb,
    /// `hsb(h, s, b)`.
    Hsb,
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An immutable color value.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    name: &'static str,
    rgb: Rgb,
    hsb: Hsb,
    mode: Mode,
}

impl Color {
    /// A color from a validated RGB value. `name` is empty for unnamed colors.
    #[must_use]
    pub fn new(name: &'static str, rgb: Rgb) -> Self {
        Self {
            name,
            rgb,
            hsb: rgb.to_hsb(),
            mode: Mode::Name,
        }
    }

    /// A catalog color by exact name.
    ///
    /// # Errors
    ///
    /// [`ConvertError::NameNotFound`] if the catalog has no such name.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        catalog::entry(name)
            .map(|(name, rgb)| Self::new(name, rgb))
            .ok_or_else(|| ConvertError::NameNotFound(name.to_owned()))
    }

    /// A color from a raw RGB triple, named if the catalog knows it.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidRgb`] if a channel is outside `0..=255`.
    pub fn from_rgb(rgb: [i32; 3]) -> Result<Self, ConvertError> {
        Ok(Self::unnamed(convert::validate_rgb(rgb)?))
    }

    /// A color from a `#RRGGBB` string, named if the catalog knows it.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidHex`] for anything but `#` and six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ConvertError> {
        Ok(Self::unnamed(convert::hex_to_rgb(hex)?))
    }

    /// A color from a raw HSB triple. The given HSB is kept as-is (hue 360
    /// reads back as 0); RGB is derived from it.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidHsb`] for an out-of-range component.
    pub fn from_hsb(hsb: [i32; 3]) -> Result<Self, ConvertError> {
        let mut hsb = convert::validate_hsb(hsb)?;
        let rgb = hsb.to_rgb();
        hsb.hue %= 360;
        Ok(Self {
            hsb,
            mode: Mode::Hsb,
            ..Self::unnamed(rgb)
        })
    }

    fn unnamed(rgb: Rgb) -> Self {
        Self::new(catalog::reverse_lookup(rgb).unwrap_or_default(), rgb)
    }

    /// Every catalog color, in catalog order, in the given mode.
    pub fn catalog(mode: Mode) -> impl Iterator<Item = Self> {
        catalog::COLORNAMES
            .iter()
            .map(move |&(name, rgb)| Self::new(name, rgb).with_mode(mode))
    }

    /// Return a copy displayed in another mode.
    #[inline]
    #[must_use]
    pub const fn with_mode(self, mode: Mode) -> Self {
        Self { mode, ..self }
    }

    /// Catalog name, or `""` for a color the catalog doesn't name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    #[must_use]
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    #[inline]
    #[must_use]
    pub const fn hsb(&self) -> Hsb {
        self.hsb
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// `#RRGGBB`, uppercase.
    #[must_use]
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.rgb == other.rgb
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rgb.hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Mode::Name if self.name.is_empty() => f.write_str(&self.hex()),
            Mode::Name => f.write_str(self.name),
            Mode::Rgb => {
                let Rgb { r, g, b } = self.rgb;
                write!(f, "rgb({r}, {g}, {b})")
            }
            Mode::Hsb => {
                let Hsb { hue, sat, bright } = self.hsb;
                write!(f, "hsb({hue}, {sat}, {bright})")
            }
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = ConvertError;

    /// Hex when it starts with `#`, otherwise a catalog name.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.starts_with('#') {
            Self::from_hex(s)
        } else {
            Self::from_name(s)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_name_derives_everything() {
        let c = Color::from_name("Alice Blue").unwrap();
        assert_eq!(c.name(), "Alice Blue");
        assert_eq!(c.rgb(), Rgb::new(240, 248, 255));
        assert_eq!(c.hsb(), Hsb::new(208, 6, 100));
        assert_eq!(c.hex(), "#F0F8FF");
        assert_eq!(c.mode(), Mode::Name);
    }

    #[test]
    fn from_name_keeps_duplicate_names() {
        assert_eq!(Color::from_name("Cyan").unwrap().name(), "Cyan");
        assert_eq!(Color::from_name("Aqua").unwrap().name(), "Aqua");
    }

    #[test]
    fn from_name_unknown() {
        assert_eq!(
            Color::from_name("Blurple"),
            Err(ConvertError::NameNotFound("Blurple".into()))
        );
    }

    #[test]
    fn from_rgb_names_first_match() {
        assert_eq!(Color::from_rgb([0, 255, 255]).unwrap().name(), "Aqua");
        assert_eq!(Color::from_rgb([1, 2, 3]).unwrap().name(), "");
        assert!(Color::from_rgb([0, 0, 256]).is_err());
    }

    #[test]
    fn from_hex_parses() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c.name(), "Red");
        assert!(Color::from_hex("#FFF").is_err());
    }

    #[test]
    fn from_hsb_keeps_hsb() {
        let c = Color::from_hsb([30, 100, 100]).unwrap();
        assert_eq!(c.rgb(), Rgb::new(255, 128, 0));
        assert_eq!(c.hsb(), Hsb::new(30, 100, 100));
        assert_eq!(c.mode(), Mode::Hsb);

        let red = Color::from_hsb([360, 100, 100]).unwrap();
        assert_eq!(red.name(), "Red");
        assert_eq!(red.hsb(), Hsb::new(0, 100, 100));
    }

    #[test]
    fn equality_is_by_rgb() {
        let aqua = Color::from_name("Aqua").unwrap();
        let cyan = Color::from_name("Cyan").unwrap().with_mode(Mode::Hsb);
        assert_eq!(aqua, cyan);
        assert_ne!(aqua, Color::from_name("Red").unwrap());
    }

    #[test]
    fn display_follows_mode() {
        let c = Color::from_name("Alice Blue").unwrap();
        assert_eq!(c.to_string(), "Alice Blue");
        assert_eq!(c.with_mode(Mode::Rgb).to_string(), "rgb(240, 248, 255)");
        assert_eq!(c.with_mode(Mode::Hsb).to_string(), "hsb(208, 6, 100)");
    }

    #[test]
    fn unnamed_displays_as_hex() {
        assert_eq!(Color::from_rgb([1, 2, 3]).unwrap().to_string(), "#010203");
    }

    #[test]
    fn catalog_iterates_in_order() {
        let all: Vec<_> = Color::catalog(Mode::Rgb).collect();
        assert_eq!(all.len(), 144);
        assert_eq!(all[0].name(), "Alice Blue");
        assert!(all.iter().all(|c| c.mode() == Mode::Rgb));
    }

    #[test]
    fn try_from_str() {
        assert_eq!(Color::try_from("Red").unwrap().rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Color::try_from("#0000FF").unwrap().name(), "Blue");
        assert!(Color::try_from("#XYZ").is_err());
    }
}
