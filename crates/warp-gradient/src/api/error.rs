//! Unified error type for the warp-gradient public API.
//!
//! [`WarpError`] wraps the crate's parse errors into a single enum for
//! convenient `?` propagation in application code. Warping itself is a
//! total function and never fails; errors only arise at the input-parsing
//! front door.

use std::fmt;

use crate::color::ParseColorError;
use crate::stops::ParseModeError;

/// Unified error type for the warp-gradient public API.
///
/// # Example
///
/// ```
/// use warp_gradient::{GradientWarper, WarpError};
///
/// fn build() -> Result<GradientWarper, WarpError> {
///     GradientWarper::from_hex(&[("#000000", 0.0), ("#FFFFFF", 1.0)])
/// }
/// ```
#[derive(Debug)]
pub enum WarpError {
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Unknown interpolation mode name
    ParseMode(ParseModeError),
}

impl fmt::Display for WarpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarpError::ParseColor(err) => write!(f, "color parse error: {}", err),
            WarpError::ParseMode(err) => write!(f, "mode parse error: {}", err),
        }
    }
}

impl std::error::Error for WarpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WarpError::ParseColor(err) => Some(err),
            WarpError::ParseMode(err) => Some(err),
        }
    }
}

impl From<ParseColorError> for WarpError {
    fn from(err: ParseColorError) -> Self {
        WarpError::ParseColor(err)
    }
}

impl From<ParseModeError> for WarpError {
    fn from(err: ParseModeError) -> Self {
        WarpError::ParseMode(err)
    }
}
