//! warp-gradient: easing-curve warped linear gradients
//!
//! Standard linear gradients interpolate color uniformly along their axis.
//! This crate approximates a *non-linear* color progression -- one shaped by
//! a cubic Bézier easing curve -- using only plain linear stops, so the
//! result renders anywhere a linear gradient does. It does this by
//! "warping": sampling the easing curve adaptively and emitting an expanded
//! list of (position, color) stops whose piecewise-linear rendering tracks
//! the eased progression.
//!
//! # Quick Start
//!
//! The [`GradientWarper`] builder is the primary entry point:
//!
//! ```
//! use warp_gradient::{EasingCurve, GradientWarper, InterpolationMode};
//!
//! let warper = GradientWarper::from_hex(&[("#fb2380", 0.0), ("#28e2fb", 1.0)])
//!     .unwrap()
//!     .curve(EasingCurve::ease_in_out())
//!     .mode(InterpolationMode::Oklch)
//!     .samples(16);
//!
//! let warped = warper.warp();
//! assert!(warped.len() == 16 || warped.len() == 17);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! key stops + easing curve + mode + sample count
//!     |
//!     v
//! Adaptive Sampler        abscissae x_0=0 .. x_k=1, clustered where the
//!     |                   curve's arc rate is high
//!     v
//! Curve Solver            y = E(x) per abscissa (Newton-Raphson with
//!     |                   bisection fallback)
//!     v
//! Key-Stop Evaluator      color at progression y, blended in the selected
//!     |                   color space
//!     v
//! warped stops            ordered (position, color) pairs, endpoints
//!                         anchored at 0 and 1
//! ```
//!
//! # Color Spaces
//!
//! Blending happens in one of three spaces, selected by
//! [`InterpolationMode`]:
//!
//! | Mode | Space | Character |
//! |------|-------|-----------|
//! | `rgb` | gamma-encoded sRGB | what CSS does today; desaturated, often muddy midpoints |
//! | `oklab` | Cartesian OKLab | perceptually even lightness; complementary hues pass near gray |
//! | `oklch` | polar OKLab | chroma preserved, hue travels the shortest arc |
//!
//! The conversion chain is sRGB <-> linear RGB <-> OKLab <-> OKLCH, with the
//! Ottosson matrices at full published precision and all math in f64. Out of
//! gamut results are clamped componentwise in linear RGB; there is no chroma
//! reduction or hue-preserving mapping.
//!
//! # Totality and determinism
//!
//! The core is a pure synchronous function. Every well-typed finite input
//! produces a well-defined output: degenerate stop lists fall back to black,
//! undersized sample counts are clamped, non-monotone curves are solved by
//! bisection. Nothing is logged, no errors escape the warping path, and
//! repeated invocations are bit-identical. NaN or infinite inputs are the
//! caller's responsibility.

pub mod api;
pub mod color;
pub mod curve;
pub mod sampler;
pub mod stops;


pub use api::{GradientWarper, WarpError};
pub use color::{LinearRgb, Oklab, Oklch, ParseColorError, Srgb};
pub use curve::{EasingCurve, Point};
pub use sampler::{adaptive_samples, PROBE_COUNT};
pub use stops::{color_at, interpolate, ColorStop, InterpolationMode, ParseModeError};
