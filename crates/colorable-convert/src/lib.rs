// SPDX-License-Identifier: MIT
//
// colorable-convert — the color converter behind colorable.
//
// Stateless, validated conversions between the four ways colorable names a
// color: a catalog name, an RGB triple, an HSB (HSV) triple, and a `#RRGGBB`
// hex string. Nothing here allocates state or blocks; the only globals are
// the constant catalog and a lazily compiled hex pattern.
//
//   name ──catalog──► Rgb ◄──► Hsb
//                      ▲
//                      └──────► hex

pub mod catalog;
pub mod convert;
pub mod error;
pub mod model;

pub use convert::{
    hex_to_rgb, hsb_to_rgb, hsv_to_rgb, name_to_rgb, rgb_to_hex, rgb_to_hsb, rgb_to_hsl,
    rgb_to_hsv, rgb_to_name, validate_hex, validate_hsb, validate_rgb,
};
pub use error::{ConvertError, Result};
pub use model::{Hsb, Rgb};
