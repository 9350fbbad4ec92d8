// SPDX-License-Identifier: MIT
//
// Converter errors. Malformed input is an error; a well-formed value with
// no match (an RGB triple nobody named) is an `Option::None` upstream.

use thiserror::Error;

/// Errors raised by the converter.
///
/// The three `Invalid*` variants are the validation family: they are returned
/// before any conversion math runs and never silently clamp. Misses that are
/// not malformed input (an RGB value with no catalog name) are reported as
/// `None` by the converter, not as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A channel fell outside `0..=255`.
    #[error("'{0:?}' is invalid for a RGB value")]
    InvalidRgb([i32; 3]),

    /// Hue outside `0..=360`, or saturation/brightness outside `0..=100`.
    #[error("'{0:?}' is invalid for a HSB value")]
    InvalidHsb([i32; 3]),

    /// Not of the form `#RRGGBB`.
    #[error("'{0}' is invalid for a HEX value")]
    InvalidHex(String),

    /// The catalog has no color with this exact name.
    #[error("no color named '{0}' in the catalog")]
    NameNotFound(String),

    /// A conversion path that exists in the API but has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl ConvertError {
    /// Whether this error rejects a malformed RGB, HSB, or hex input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidRgb(_) | Self::InvalidHsb(_) | Self::InvalidHex(_)
        )
    }
}

/// Result alias used throughout the converter.
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
