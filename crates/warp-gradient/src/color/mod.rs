//! Color types and conversion utilities
//!
//! This module provides type-safe color handling with compile-time distinction
//! between the four color spaces the gradient pipeline moves through.
//!
//! # Color Spaces
//!
//! - **sRGB**: The standard gamma-encoded space for input/output and for the
//!   plain RGB blending mode.
//! - **LinearRgb**: Linear light intensity, the required intermediate between
//!   sRGB and OKLab.
//! - **Oklab**: Perceptually uniform Cartesian space for the `oklab` blending
//!   mode.
//! - **Oklch**: Polar form of Oklab for hue-aware blending in the `oklch` mode.
//!
//! # Example
//!
//! ```
//! use warp_gradient::{LinearRgb, Oklab, Srgb};
//!
//! let srgb = Srgb::from_u8(128, 64, 32);
//! let lab = Oklab::from(LinearRgb::from(srgb));
//! let back = Srgb::from(LinearRgb::from(lab).clamp_unit());
//! ```

mod error;
mod linear_rgb;
mod oklab;
mod oklch;
mod srgb;
mod transfer;

pub use error::ParseColorError;
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use srgb::Srgb;
