//! Colorset construction errors.

use colorable_convert::ConvertError;
use thiserror::Error;

/// Errors that can occur while building a [`Colorset`](crate::Colorset).
///
/// Cursor moves never fail; only construction does, and a failed
/// construction leaves nothing behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorsetError {
    /// The order option named no known sort key.
    #[error("'{0}' is not adequate for order option")]
    InvalidOrder(String),

    /// The direction option was neither ascending nor descending.
    #[error("'{0}' is not a direction; use '+' or '-'")]
    InvalidDirection(String),

    /// A colorset was requested over zero colors.
    #[error("a colorset needs at least one color")]
    Empty,

    /// A color in the source could not be converted.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Result alias for colorset construction.
pub type Result<T, E = ColorsetError> = std::result::Result<T, E>;
