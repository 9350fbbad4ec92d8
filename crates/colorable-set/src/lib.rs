//! # colorable-set — circular, sortable colorsets
//!
//! Builds an ordered ring over the named-color catalog (or any colors you
//! hand it) and walks it with a cursor.
//!
//! # Architecture
//!
//! ```text
//! ColorsetConfig { order, direction, source }
//!     │
//!     ▼
//! order.rs:    parse spellings, compare colors per order
//!     │
//!     ▼
//! color.rs:    catalog entries → Color (name + RGB + HSB + mode)
//!     │
//!     ▼
//! colorset.rs: sort once, then at / advance / retreat / rewind
//! ```
//!
//! # Example
//!
//! ```
//! use colorable_set::{Color, Colorset};
//!
//! let mut set = Colorset::parse("hue", "+").unwrap();
//! let first = *set.current();
//! set.advance(3);
//! set.retreat(3);
//! assert_eq!(*set.current(), first);
//!
//! let red = Color::from_name("Red").unwrap();
//! assert!(set.find_index(&red).is_some());
//! ```

pub mod color;
pub mod colorset;
pub mod error;
pub mod order;

pub use color::{Color, Mode};
pub use colorset::Colorset;
pub use error::ColorsetError;
pub use order::{ColorsetConfig, Direction, HsbChannel, Order, RgbChannel};
