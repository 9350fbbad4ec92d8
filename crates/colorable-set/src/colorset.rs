//! Colorset — a sorted ring of colors with a cursor.
//!
//! The sequence is fixed when the colorset is built; the only thing that
//! ever changes is the cursor `pos`. Moving the cursor wraps around both
//! ends, so `advance`/`retreat`/`rewind` treat the set as a color wheel to
//! cycle through. Re-sorting or reversing never touches an existing set: it
//! builds a new, independent one with its cursor at 0.
//!
//! ```text
//!        pos
//!         ▼
//!   [ c0  c1  c2  c3  c4 ]      at(0) = c1, at(-2) = c4, at(7) = c3
//! ```

use std::fmt;

use log::{debug, trace};

use crate::color::Color;
use crate::error::{ColorsetError, Result};
use crate::order::{ColorsetConfig, Direction};

/// A non-empty, ordered, circular collection of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colorset {
    colors: Vec<Color>,
    /// Always `< colors.len()`.
    pos: usize,
}

impl Colorset {
    // ── Construction ─────────────────────────────────────────

    /// Build a colorset from a configuration.
    ///
    /// # Errors
    ///
    /// [`ColorsetError::Empty`] if the configured source has no colors.
    pub fn new(config: ColorsetConfig) -> Result<Self> {
        Self::from_colors(sort_colors(config))
    }

    /// Build a colorset from order and direction spellings (`"hue"`, `"-"`).
    ///
    /// # Errors
    ///
    /// [`ColorsetError::InvalidOrder`] or [`ColorsetError::InvalidDirection`]
    /// for an unrecognized spelling.
    pub fn parse(order: &str, direction: &str) -> Result<Self> {
        Self::new(ColorsetConfig::parse(order, direction)?)
    }

    /// Wrap colors as-is, without sorting. The cursor starts at 0.
    ///
    /// # Errors
    ///
    /// [`ColorsetError::Empty`] if `colors` is empty.
    pub fn from_colors(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ColorsetError::Empty);
        }
        Ok(Self { colors, pos: 0 })
    }

    // ── Cursor ───────────────────────────────────────────────

    /// The color `offset` steps from the cursor (negative looks back).
    #[must_use]
    pub fn at(&self, offset: isize) -> &Color {
        &self.colors[self.forward(offset)]
    }

    /// The color under the cursor.
    #[inline]
    #[must_use]
    pub fn current(&self) -> &Color {
        &self.colors[self.pos]
    }

    /// Move the cursor forward `steps` (backward if negative) and return the
    /// color now under it.
    pub fn advance(&mut self, steps: isize) -> &Color {
        self.pos = self.forward(steps);
        trace!("colorset: advance {steps} -> {}", self.pos);
        self.current()
    }

    /// Move the cursor backward `steps` (forward if negative) and return the
    /// color now under it.
    pub fn retreat(&mut self, steps: isize) -> &Color {
        let len = self.colors.len();
        self.pos = (self.pos + len - wrap(steps, len)) % len;
        trace!("colorset: retreat {steps} -> {}", self.pos);
        self.current()
    }

    /// Put the cursor back on the first color and return it.
    pub fn rewind(&mut self) -> &Color {
        self.pos = 0;
        self.current()
    }

    /// Current cursor position, `0..len`.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Find the first color equal (by RGB) to `color`.
    ///
    /// The result is its storage index shifted by the cursor,
    /// `(pos + index) % len`, not the raw index. `None` if absent.
    #[must_use]
    pub fn find_index(&self, color: &Color) -> Option<usize> {
        self.colors
            .iter()
            .position(|c| c == color)
            .map(|idx| (self.pos + idx) % self.colors.len())
    }

    /// Storage index `offset` steps from the cursor.
    fn forward(&self, offset: isize) -> usize {
        let len = self.colors.len();
        (self.pos + wrap(offset, len)) % len
    }

    // ── Derivation ───────────────────────────────────────────

    /// A new colorset over these colors sorted by `key`. The cursor of the
    /// new set is 0; this set is unchanged.
    #[must_use]
    pub fn sorted_by_key<K, F>(&self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&Color) -> K,
    {
        let mut colors = self.colors.clone();
        colors.sort_by_key(key);
        debug!("colorset: derived sorted set of {}", colors.len());
        Self { colors, pos: 0 }
    }

    /// Like [`sorted_by_key`](Self::sorted_by_key), with a comparator.
    #[must_use]
    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&Color, &Color) -> std::cmp::Ordering,
    {
        let mut colors = self.colors.clone();
        colors.sort_by(compare);
        debug!("colorset: derived sorted set of {}", colors.len());
        Self { colors, pos: 0 }
    }

    /// A new colorset in reverse order, cursor at 0.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let colors: Vec<Color> = self.colors.iter().rev().copied().collect();
        debug!("colorset: derived reversed set of {}", colors.len());
        Self { colors, pos: 0 }
    }

    // ── Views ────────────────────────────────────────────────
    //
    // All of these ignore the cursor.

    /// Number of colors. Never zero.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; a colorset can't be built empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> &Color {
        &self.colors[0]
    }

    #[must_use]
    pub fn last(&self) -> &Color {
        &self.colors[self.colors.len() - 1]
    }

    /// Iterate in storage order, starting from the first color regardless
    /// of the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Color> {
        self.colors.clone()
    }
}

/// The configured source (the catalog when absent), sorted and directed.
fn sort_colors(config: ColorsetConfig) -> Vec<Color> {
    let ColorsetConfig {
        order,
        direction,
        source,
    } = config;

    let mut colors = source.unwrap_or_else(|| Color::catalog(order.mode()).collect());
    colors.sort_by(|a, b| order.compare(a, b));
    if direction == Direction::Descending {
        colors.reverse();
    }

    debug!("colorset: order={order} dir={direction} size={}", colors.len());
    colors
}

/// Reduce a signed step count into `0..len`.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn wrap(steps: isize, len: usize) -> usize {
    // `Vec` lengths never exceed `isize::MAX`.
    steps.rem_euclid(len as isize) as usize
}

impl Default for Colorset {
    /// The whole catalog, by name, ascending.
    fn default() -> Self {
        // The catalog is never empty, so this skips `from_colors`' check.
        Self {
            colors: sort_colors(ColorsetConfig::default()),
            pos: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Colorset {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Colorset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.current();
        write!(
            f,
            "#<Colorset {}/{} pos='{}/{}/{}'>",
            self.pos,
            self.len(),
            c.name(),
            c.rgb(),
            c.hsb()
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Mode;
    use crate::order::{HsbChannel, Order, RgbChannel};
    use pretty_assertions::assert_eq;

    const CATALOG_LEN: usize = 144;

    fn color(name: &str) -> Color {
        Color::from_name(name).unwrap()
    }

    fn names(cs: &Colorset) -> Vec<&'static str> {
        cs.iter().map(Color::name).collect()
    }

    fn by_name() -> Colorset {
        Colorset::new(ColorsetConfig::default()).unwrap()
    }

    fn small() -> Colorset {
        let colors = ["Red", "Green", "Blue", "White", "Black"].map(color).to_vec();
        Colorset::from_colors(colors).unwrap()
    }

    // ── Construction ─────────────────────────────────────────

    #[test]
    fn default_is_whole_catalog_by_name() {
        let cs = by_name();
        assert_eq!(cs.len(), CATALOG_LEN);
        assert_eq!(cs.position(), 0);
        assert_eq!(cs.first().name(), "Alice Blue");
        assert_eq!(cs.last().name(), "Yellow Green");
        assert!(cs.iter().all(|c| c.mode() == Mode::Name));
    }

    #[test]
    fn default_matches_default_config() {
        let default = Colorset::default();
        assert_eq!(default, by_name());
        assert_eq!(names(&default), names(&by_name()));
        assert_eq!(default.position(), 0);
        assert!(default.iter().all(|c| c.mode() == Mode::Name));
    }

    #[test]
    fn name_order_is_non_decreasing() {
        let cs = by_name();
        let names = names(&cs);
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn descending_is_exact_reverse() {
        for order in Order::NAMES {
            let up = Colorset::parse(order, "+").unwrap();
            let down = Colorset::parse(order, "-").unwrap();
            let mut reversed = names(&up);
            reversed.reverse();
            assert_eq!(names(&down), reversed, "order {order}");
        }
    }

    #[test]
    fn rgb_orders() {
        let rgb = Colorset::parse("rgb", "+").unwrap();
        assert_eq!(
            names(&rgb)[..5],
            ["Black", "Navy", "Dark Blue", "Medium Blue", "Blue"]
        );
        assert_eq!(rgb.last().name(), "White");
        assert!(rgb.iter().all(|c| c.mode() == Mode::Rgb));

        // Red-led is the plain RGB order.
        assert_eq!(names(&Colorset::parse("red", "+").unwrap()), names(&rgb));
    }

    #[test]
    fn blue_led_order_breaks_ties_by_red_then_green() {
        let cs = Colorset::parse("blue", "+").unwrap();
        assert_eq!(
            names(&cs)[..5],
            ["Black", "Dark Green", "Green2", "Green", "Lime"]
        );
        assert_eq!(cs.last().name(), "White");
    }

    #[test]
    fn hsb_orders() {
        let hsb = Colorset::parse("hsb", "+").unwrap();
        assert_eq!(
            names(&hsb)[..5],
            ["Black", "Dim Gray", "Gray2", "Dark Gray", "Gray"]
        );
        assert_eq!(hsb.last().name(), "Light Pink");
        assert!(hsb.iter().all(|c| c.mode() == Mode::Hsb));

        let sat = Colorset::parse("sat", "+").unwrap();
        assert_eq!(sat.last().name(), "Magenta");

        let bright = Colorset::parse("bright", "+").unwrap();
        assert_eq!(
            names(&bright)[..3],
            ["Black", "Dark Slate Gray", "Dark Green"]
        );
    }

    #[test]
    fn hsv_is_hsb() {
        assert_eq!(
            names(&Colorset::parse("hsv", "+").unwrap()),
            names(&Colorset::parse("hsb", "+").unwrap())
        );
    }

    #[test]
    fn typed_config_matches_parsed() {
        let typed = Colorset::new(ColorsetConfig::new(
            Order::Hsb(Some(HsbChannel::Hue)),
            Direction::Descending,
        ))
        .unwrap();
        assert_eq!(typed, Colorset::parse("HUE", "descending").unwrap());
        let green = Colorset::new(ColorsetConfig::new(
            Order::Rgb(Some(RgbChannel::Green)),
            Direction::Ascending,
        ))
        .unwrap();
        assert_eq!(green.first().name(), "Black");
    }

    #[test]
    fn invalid_options() {
        assert_eq!(
            Colorset::parse("rainbow", "+"),
            Err(ColorsetError::InvalidOrder("rainbow".into()))
        );
        assert_eq!(
            Colorset::parse("name", "*"),
            Err(ColorsetError::InvalidDirection("*".into()))
        );
    }

    #[test]
    fn source_is_sorted_and_keeps_modes() {
        let source = vec![
            color("Red").with_mode(Mode::Rgb),
            color("Blue"),
            color("Green"),
        ];
        let config = ColorsetConfig::default().with_source(source);
        let cs = Colorset::new(config).unwrap();
        assert_eq!(names(&cs), ["Blue", "Green", "Red"]);
        assert_eq!(cs.last().mode(), Mode::Rgb);
    }

    #[test]
    fn empty_source_is_rejected() {
        let config = ColorsetConfig::default().with_source(Vec::new());
        assert_eq!(Colorset::new(config), Err(ColorsetError::Empty));
        assert_eq!(Colorset::from_colors(Vec::new()), Err(ColorsetError::Empty));
    }

    // ── Cursor ───────────────────────────────────────────────

    #[test]
    fn at_is_relative_and_pure() {
        let cs = small();
        assert_eq!(cs.at(0).name(), "Red");
        assert_eq!(cs.at(2).name(), "Blue");
        assert_eq!(cs.at(-1).name(), "Black");
        assert_eq!(cs.at(7).name(), "Blue");
        assert_eq!(cs.at(-11).name(), "Black");
        assert_eq!(cs.position(), 0);
    }

    #[test]
    fn advance_and_retreat_wrap() {
        let mut cs = small();
        assert_eq!(cs.advance(1).name(), "Green");
        assert_eq!(cs.advance(3).name(), "Black");
        assert_eq!(cs.advance(1).name(), "Red");
        assert_eq!(cs.position(), 0);
        assert_eq!(cs.retreat(1).name(), "Black");
        assert_eq!(cs.position(), 4);
        assert_eq!(cs.advance(-2).name(), "Blue");
        assert_eq!(cs.retreat(-1).name(), "White");
        assert_eq!(cs.at(1).name(), "Black");
    }

    #[test]
    fn advance_full_circle_returns_home() {
        let mut cs = by_name();
        cs.advance(17);
        let before = *cs.current();
        let len = isize::try_from(cs.len()).unwrap();
        assert_eq!(*cs.advance(len), before);
        assert_eq!(*cs.retreat(len * 3), before);
    }

    #[test]
    fn advance_then_retreat_restores_position() {
        let mut cs = by_name();
        cs.advance(5);
        for k in [-1000, -145, -1, 0, 1, 7, 143, 144, 145, 100_000, isize::MAX, isize::MIN] {
            let pos = cs.position();
            cs.advance(k);
            cs.retreat(k);
            assert_eq!(cs.position(), pos, "k = {k}");
        }
    }

    #[test]
    fn rewind_resets_cursor() {
        let mut cs = small();
        cs.advance(3);
        assert_eq!(cs.rewind().name(), "Red");
        assert_eq!(cs.position(), 0);
    }

    #[test]
    fn find_index_is_cursor_relative() {
        let mut cs = small();
        let white = color("White");
        assert_eq!(cs.find_index(&white), Some(3));
        assert_eq!(*cs.at(3), white);

        cs.advance(3);
        // (pos + index) % len = (3 + 3) % 5
        assert_eq!(cs.find_index(&white), Some(1));
        assert_eq!(cs.find_index(&color("Red")), Some(3));
    }

    #[test]
    fn find_index_matches_by_value() {
        let cs = by_name();
        // Cyan shares its RGB with Aqua, which comes first.
        let idx = cs.find_index(&color("Cyan")).unwrap();
        assert_eq!(cs.at(isize::try_from(idx).unwrap()).name(), "Aqua");
    }

    #[test]
    fn find_index_miss() {
        let cs = by_name();
        assert_eq!(cs.find_index(&Color::from_rgb([1, 2, 3]).unwrap()), None);
    }

    // ── Derivation ───────────────────────────────────────────

    #[test]
    fn sorted_by_key_leaves_original_alone() {
        let mut cs = small();
        cs.advance(2);
        let before = cs.to_vec();

        let sorted = cs.sorted_by_key(|c| c.hsb().bright);
        assert_eq!(sorted.position(), 0);
        assert_eq!(sorted.first().name(), "Black");
        assert_eq!(cs.to_vec(), before);
        assert_eq!(cs.position(), 2);
    }

    #[test]
    fn sorted_by_comparator() {
        let cs = small();
        let sorted = cs.sorted_by(|a, b| b.name().cmp(a.name()));
        assert_eq!(names(&sorted), ["White", "Red", "Green", "Blue", "Black"]);
        assert_eq!(names(&cs), ["Red", "Green", "Blue", "White", "Black"]);
    }

    #[test]
    fn reversed_is_independent() {
        let mut cs = small();
        cs.advance(1);
        let mut rev = cs.reversed();
        assert_eq!(rev.position(), 0);
        assert_eq!(names(&rev), ["Black", "White", "Blue", "Green", "Red"]);

        rev.advance(2);
        assert_eq!(cs.position(), 1);
        assert_eq!(names(&cs), ["Red", "Green", "Blue", "White", "Black"]);
    }

    // ── Views ────────────────────────────────────────────────

    #[test]
    fn iteration_ignores_cursor_and_restarts() {
        let mut cs = small();
        cs.advance(3);
        let first_pass: Vec<_> = cs.iter().copied().collect();
        let second_pass: Vec<_> = (&cs).into_iter().copied().collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass, cs.to_vec());
        assert_eq!(first_pass[0].name(), "Red");
        assert_eq!(cs.as_slice().len(), 5);
        assert!(!cs.is_empty());
    }

    #[test]
    fn display_describes_cursor() {
        let mut cs = by_name();
        assert_eq!(
            cs.to_string(),
            "#<Colorset 0/144 pos='Alice Blue/[240, 248, 255]/[208, 6, 100]'>"
        );
        cs.retreat(1);
        assert_eq!(
            cs.to_string(),
            "#<Colorset 143/144 pos='Yellow Green/[154, 205, 50]/[79, 76, 80]'>"
        );
    }
}
