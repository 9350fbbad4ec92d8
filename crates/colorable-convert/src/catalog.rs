// SPDX-License-Identifier: MIT
//
// The named-color catalog.
//
// Based on the X11 color names. Where a W3C color conflicts with the X11
// color of the same name, the W3C one carries a `2` suffix ("Gray2",
// "Green2", "Maroon2", "Purple2"). Several names share an RGB value
// ("Aqua"/"Cyan", "Fuchsia"/"Magenta", "Green"/"Lime"), so name → RGB is a
// function but RGB → name is not: reverse lookup takes the first entry in
// catalog order.

use crate::model::Rgb;

/// Every named color, in catalog order.
pub const COLORNAMES: &[(&str, Rgb)] = &[
    ("Alice Blue", Rgb::new(240, 248, 255)),
    ("Antique White", Rgb::new(250, 235, 215)),
    ("Aqua", Rgb::new(0, 255, 255)),
    ("Aquamarine", Rgb::new(127, 255, 212)),
    ("Azure", Rgb::new(240, 255, 255)),
    ("Beige", Rgb::new(245, 245, 220)),
    ("Bisque", Rgb::new(255, 228, 196)),
    ("Black", Rgb::new(0, 0, 0)),
    ("Blanched Almond", Rgb::new(255, 235, 205)),
    ("Blue", Rgb::new(0, 0, 255)),
    ("Blue Violet", Rgb::new(138, 43, 226)),
    ("Brown", Rgb::new(165, 42, 42)),
    ("Burlywood", Rgb::new(222, 184, 135)),
    ("Cadet Blue", Rgb::new(95, 158, 160)),
    ("Chartreuse", Rgb::new(127, 255, 0)),
    ("Chocolate", Rgb::new(210, 105, 30)),
    ("Coral", Rgb::new(255, 127, 80)),
    ("Cornflower", Rgb::new(100, 149, 237)),
    ("Cornsilk", Rgb::new(255, 248, 220)),
    ("Crimson", Rgb::new(220, 20, 60)),
    ("Cyan", Rgb::new(0, 255, 255)),
    ("Dark Blue", Rgb::new(0, 0, 139)),
    ("Dark Cyan", Rgb::new(0, 139, 139)),
    ("Dark Goldenrod", Rgb::new(184, 134, 11)),
    ("Dark Gray", Rgb::new(169, 169, 169)),
    ("Dark Green", Rgb::new(0, 100, 0)),
    ("Dark Khaki", Rgb::new(189, 183, 107)),
    ("Dark Magenta", Rgb::new(139, 0, 139)),
    ("Dark Olive Green", Rgb::new(85, 107, 47)),
    ("Dark Orange", Rgb::new(255, 140, 0)),
    ("Dark Orchid", Rgb::new(153, 50, 204)),
    ("Dark Red", Rgb::new(139, 0, 0)),
    ("Dark Salmon", Rgb::new(233, 150, 122)),
    ("Dark Sea Green", Rgb::new(143, 188, 143)),
    ("Dark Slate Blue", Rgb::new(72, 61, 139)),
    ("Dark Slate Gray", Rgb::new(47, 79, 79)),
    ("Dark Turquoise", Rgb::new(0, 206, 209)),
    ("Dark Violet", Rgb::new(148, 0, 211)),
    ("Deep Pink", Rgb::new(255, 20, 147)),
    ("Deep Sky Blue", Rgb::new(0, 191, 255)),
    ("Dim Gray", Rgb::new(105, 105, 105)),
    ("Dodger Blue", Rgb::new(30, 144, 255)),
    ("Firebrick", Rgb::new(178, 34, 34)),
    ("Floral White", Rgb::new(255, 250, 240)),
    ("Forest Green", Rgb::new(34, 139, 34)),
    ("Fuchsia", Rgb::new(255, 0, 255)),
    ("Gainsboro", Rgb::new(220, 220, 220)),
    ("Ghost White", Rgb::new(248, 248, 255)),
    ("Gold", Rgb::new(255, 215, 0)),
    ("Goldenrod", Rgb::new(218, 165, 32)),
    ("Gray", Rgb::new(190, 190, 190)),
    ("Gray2", Rgb::new(128, 128, 128)),
    ("Green", Rgb::new(0, 255, 0)),
    ("Green Yellow", Rgb::new(173, 255, 47)),
    ("Green2", Rgb::new(0, 128, 0)),
    ("Honeydew", Rgb::new(240, 255, 240)),
    ("Hot Pink", Rgb::new(255, 105, 180)),
    ("Indian Red", Rgb::new(205, 92, 92)),
    ("Indigo", Rgb::new(75, 0, 130)),
    ("Ivory", Rgb::new(255, 255, 240)),
    ("Khaki", Rgb::new(240, 230, 140)),
    ("Lavender", Rgb::new(230, 230, 250)),
    ("Lavender Blush", Rgb::new(255, 240, 245)),
    ("Lawn Green", Rgb::new(124, 252, 0)),
    ("Lemon Chiffon", Rgb::new(255, 250, 205)),
    ("Light Blue", Rgb::new(173, 216, 230)),
    ("Light Coral", Rgb::new(240, 128, 128)),
    ("Light Cyan", Rgb::new(224, 255, 255)),
    ("Light Goldenrod", Rgb::new(250, 250, 210)),
    ("Light Gray", Rgb::new(211, 211, 211)),
    ("Light Green", Rgb::new(144, 238, 144)),
    ("Light Pink", Rgb::new(255, 182, 193)),
    ("Light Salmon", Rgb::new(255, 160, 122)),
    ("Light Sea Green", Rgb::new(32, 178, 170)),
    ("Light Sky Blue", Rgb::new(135, 206, 250)),
    ("Light Slate Gray", Rgb::new(119, 136, 153)),
    ("Light Steel Blue", Rgb::new(176, 196, 222)),
    ("Light Yellow", Rgb::new(255, 255, 224)),
    ("Lime", Rgb::new(0, 255, 0)),
    ("Lime Green", Rgb::new(50, 205, 50)),
    ("Linen", Rgb::new(250, 240, 230)),
    ("Magenta", Rgb::new(255, 0, 255)),
    ("Maroon", Rgb::new(176, 48, 96)),
    ("Maroon2", Rgb::new(127, 0, 0)),
    ("Medium Aquamarine", Rgb::new(102, 205, 170)),
    ("Medium Blue", Rgb::new(0, 0, 205)),
    ("Medium Orchid", Rgb::new(186, 85, 211)),
    ("Medium Purple", Rgb::new(147, 112, 219)),
    ("Medium Sea Green", Rgb::new(60, 179, 113)),
    ("Medium Slate Blue", Rgb::new(123, 104, 238)),
    ("Medium Spring Green", Rgb::new(0, 250, 154)),
    ("Medium Turquoise", Rgb::new(72, 209, 204)),
    ("Medium Violet Red", Rgb::new(199, 21, 133)),
    ("Midnight Blue", Rgb::new(25, 25, 112)),
    ("Mint Cream", Rgb::new(245, 255, 250)),
    ("Misty Rose", Rgb::new(255, 228, 225)),
    ("Moccasin", Rgb::new(255, 228, 181)),
    ("Navajo White", Rgb::new(255, 222, 173)),
    ("Navy", Rgb::new(0, 0, 128)),
    ("Old Lace", Rgb::new(253, 245, 230)),
    ("Olive", Rgb::new(128, 128, 0)),
    ("Olive Drab", Rgb::new(107, 142, 35)),
    ("Orange", Rgb::new(255, 165, 0)),
    ("Orange Red", Rgb::new(255, 69, 0)),
    ("Orchid", Rgb::new(218, 112, 214)),
    ("Pale Goldenrod", Rgb::new(238, 232, 170)),
    ("Pale Green", Rgb::new(152, 251, 152)),
    ("Pale Turquoise", Rgb::new(175, 238, 238)),
    ("Pale Violet Red", Rgb::new(219, 112, 147)),
    ("Papaya Whip", Rgb::new(255, 239, 213)),
    ("Peach Puff", Rgb::new(255, 218, 185)),
    ("Peru", Rgb::new(205, 133, 63)),
    ("Pink", Rgb::new(255, 192, 203)),
    ("Plum", Rgb::new(221, 160, 221)),
    ("Powder Blue", Rgb::new(176, 224, 230)),
    ("Purple", Rgb::new(160, 32, 240)),
    ("Purple2", Rgb::new(127, 0, 127)),
    ("Red", Rgb::new(255, 0, 0)),
    ("Rosy Brown", Rgb::new(188, 143, 143)),
    ("Royal Blue", Rgb::new(65, 105, 225)),
    ("Saddle Brown", Rgb::new(139, 69, 19)),
    ("Salmon", Rgb::new(250, 128, 114)),
    ("Sandy Brown", Rgb::new(244, 164, 96)),
    ("Sea Green", Rgb::new(46, 139, 87)),
    ("Seashell", Rgb::new(255, 245, 238)),
    ("Sienna", Rgb::new(160, 82, 45)),
    ("Silver", Rgb::new(192, 192, 192)),
    ("Sky Blue", Rgb::new(135, 206, 235)),
    ("Slate Blue", Rgb::new(106, 90, 205)),
    ("Slate Gray", Rgb::new(112, 128, 144)),
    ("Snow", Rgb::new(255, 250, 250)),
    ("Spring Green", Rgb::new(0, 255, 127)),
    ("Steel Blue", Rgb::new(70, 130, 180)),
    ("Tan", Rgb::new(210, 180, 140)),
    ("Teal", Rgb::new(0, 128, 128)),
    ("Thistle", Rgb::new(216, 191, 216)),
    ("Tomato", Rgb::new(255, 99, 71)),
    ("Turquoise", Rgb::new(64, 224, 208)),
    ("Violet", Rgb::new(238, 130, 238)),
    ("Wheat", Rgb::new(245, 222, 179)),
    ("White", Rgb::new(255, 255, 255)),
    ("White Smoke", Rgb::new(245, 245, 245)),
    ("Yellow", Rgb::new(255, 255, 0)),
    ("Yellow Green", Rgb::new(154, 205, 50)),
];

/// Look up a color by its exact, case-sensitive name.
#[must_use]
pub fn lookup(name: &str) -> Option<Rgb> {
    entry(name).map(|(_, rgb)| rgb)
}

/// Like [`lookup`], but also hands back the catalog's own `'static` name.
#[must_use]
pub fn entry(name: &str) -> Option<(&'static str, Rgb)> {
    COLORNAMES.iter().copied().find(|&(n, _)| n == name)
}

/// Find the first catalog name (in catalog order) for an RGB value.
#[must_use]
pub fn reverse_lookup(rgb: Rgb) -> Option<&'static str> {
    COLORNAMES
        .iter()
        .find(|&&(_, c)| c == rgb)
        .map(|&(name, _)| name)
}

/// Iterate catalog names in catalog order.
pub fn names() -> impl Iterator<Item = &'static str> {
    COLORNAMES.iter().map(|&(name, _)| name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
