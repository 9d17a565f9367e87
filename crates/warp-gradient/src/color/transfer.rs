//! sRGB transfer function (IEC 61966-2-1)
//!
//! The piecewise gamma curve is evaluated directly in f64. The gradient
//! output is quantized to 8 bits per channel, and the quantization contract
//! allows at most 1 LSB of deviation, which rules out table approximations.

/// Convert a gamma-encoded sRGB value (0.0..=1.0) to linear light.
#[inline]
pub(crate) fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light value (0.0..=1.0) to gamma-encoded sRGB.
#[inline]
pub(crate) fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}
