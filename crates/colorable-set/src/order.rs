//! Colorset configuration — sort order, direction, and source.
//!
//! Orders and directions are typed values; their string spellings exist for
//! configuration input (command lines, settings files) and parse
//! case-insensitively:
//!
//! | Spelling               | Order                     | Mode  |
//! |------------------------|---------------------------|-------|
//! | `name`                 | `Order::Name`             | Name  |
//! | `rgb`                  | `Order::Rgb(None)`        | Rgb   |
//! | `red` `green` `blue`   | `Order::Rgb(Some(ch))`    | Rgb   |
//! | `hsb` `hsv`            | `Order::Hsb(None)`        | Hsb   |
//! | `hue` `sat` `bright`   | `Order::Hsb(Some(ch))`    | Hsb   |
//!
//! | Spelling                 | Direction    |
//! |--------------------------|--------------|
//! | `+` `asc` `ascending`    | `Ascending`  |
//! | `-` `desc` `descending`  | `Descending` |
//!
//! A channel-led order is a three-key sort, not a single-channel one: the
//! named channel is compared first and the other two break ties in their
//! original relative order. `blue` sorts by `(b, r, g)`; `sat` by
//! `(sat, hue, bright)`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::color::{Color, Mode};
use crate::error::ColorsetError;

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

/// An RGB channel, by position in the `(r, g, b)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RgbChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

/// An HSB component, by position in the `(hue, sat, bright)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HsbChannel {
    Hue = 0,
    Sat = 1,
    Bright = 2,
}

/// Move `triple[index]` to the front, keeping the other two in order.
///
/// `rotate([r, g, b], 2) == [b, r, g]`. Used only to build sort keys.
///
/// # Panics
///
/// Panics if `index > 2`.
#[must_use]
pub fn rotate<T: Copy>(triple: [T; 3], index: usize) -> [T; 3] {
    let mut key = triple;
    key[..=index].rotate_right(1);
    key
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// What a colorset is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Lexicographic by name.
    #[default]
    Name,
    /// By RGB triple, optionally with one channel promoted to primary key.
    Rgb(Option<RgbChannel>),
    /// By HSB triple, optionally with one component promoted to primary key.
    Hsb(Option<HsbChannel>),
}

impl Order {
    /// Every accepted spelling, for help text.
    pub const NAMES: &'static [&'static str] = &[
        "name", "rgb", "red", "green", "blue", "hsb", "hsv", "hue", "sat", "bright",
    ];

    /// The display mode that matches this order's family.
    #[must_use]
    pub const fn mode(self) -> Mode {
        match self {
            Self::Name => Mode::Name,
            Self::Rgb(_) => Mode::Rgb,
            Self::Hsb(_) => Mode::Hsb,
        }
    }

    /// Compare two colors under this order.
    #[must_use]
    pub fn compare(self, a: &Color, b: &Color) -> Ordering {
        match self {
            Self::Name => a.name().cmp(b.name()),
            Self::Rgb(None) => a.rgb().cmp(&b.rgb()),
            Self::Rgb(Some(ch)) => {
                let key = |c: &Color| rotate(c.rgb().to_array(), ch as usize);
                key(a).cmp(&key(b))
            }
            Self::Hsb(None) => a.hsb().cmp(&b.hsb()),
            Self::Hsb(Some(ch)) => {
                let key = |c: &Color| rotate(c.hsb().triple(), ch as usize);
                key(a).cmp(&key(b))
            }
        }
    }
}

impl FromStr for Order {
    type Err = ColorsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "name" => Self::Name,
            "rgb" => Self::Rgb(None),
            "red" => Self::Rgb(Some(RgbChannel::Red)),
            "green" => Self::Rgb(Some(RgbChannel::Green)),
            "blue" => Self::Rgb(Some(RgbChannel::Blue)),
            "hsb" | "hsv" => Self::Hsb(None),
            "hue" => Self::Hsb(Some(HsbChannel::Hue)),
            "sat" => Self::Hsb(Some(HsbChannel::Sat)),
            "bright" => Self::Hsb(Some(HsbChannel::Bright)),
            _ => return Err(ColorsetError::InvalidOrder(s.to_owned())),
        })
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Rgb(None) => "rgb",
            Self::Rgb(Some(RgbChannel::Red)) => "red",
            Self::Rgb(Some(RgbChannel::Green)) => "green",
            Self::Rgb(Some(RgbChannel::Blue)) => "blue",
            Self::Hsb(None) => "hsb",
            Self::Hsb(Some(HsbChannel::Hue)) => "hue",
            Self::Hsb(Some(HsbChannel::Sat)) => "sat",
            Self::Hsb(Some(HsbChannel::Bright)) => "bright",
        })
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Sort direction. `Descending` is the exact reverse of `Ascending`,
/// ties included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for Direction {
    type Err = ColorsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "+" | "asc" | "ascending" => Ok(Self::Ascending),
            "-" | "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ColorsetError::InvalidDirection(s.to_owned())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "+",
            Self::Descending => "-",
        })
    }
}

// ---------------------------------------------------------------------------
// ColorsetConfig
// ---------------------------------------------------------------------------

/// Everything [`Colorset::new`](crate::Colorset::new) needs.
///
/// Without a `source`, the colorset is built from the whole catalog, every
/// color tagged with the order's [`Mode`]. A supplied source is sorted as
/// given and keeps its colors' own modes.
#[derive(Debug, Clone, Default)]
pub struct ColorsetConfig {
    pub order: Order,
    pub direction: Direction,
    pub source: Option<Vec<Color>>,
}

impl ColorsetConfig {
    #[must_use]
    pub fn new(order: Order, direction: Direction) -> Self {
        Self {
            order,
            direction,
            source: None,
        }
    }

    /// Parse order and direction from their string spellings.
    ///
    /// # Errors
    ///
    /// [`ColorsetError::InvalidOrder`] or [`ColorsetError::InvalidDirection`].
    pub fn parse(order: &str, direction: &str) -> Result<Self, ColorsetError> {
        Ok(Self::new(order.parse()?, direction.parse()?))
    }

    /// Sort these colors instead of the catalog.
    #[must_use]
    pub fn with_source(mut self, colors: Vec<Color>) -> Self {
        self.source = Some(colors);
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
