//! Linear RGB color type
//!
//! Linear RGB is the intermediate between gamma-encoded sRGB and OKLab.
//! The OKLab matrices are defined over linear light, so every perceptual
//! blend passes through this type in both directions.

use super::srgb::Srgb;
use super::transfer::srgb_to_linear;

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power.
/// They are typically in the range 0.0..=1.0, but may leave this range for
/// out-of-gamut intermediates produced by OKLab/OKLCH interpolation; apply
/// [`clamp_unit`](Self::clamp_unit) before encoding back to sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel to 0.0..=1.0.
    ///
    /// This is the entire gamut policy of the crate: componentwise clamp,
    /// no chroma reduction or hue preservation.
    #[inline]
    pub fn clamp_unit(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

impl From<Srgb> for LinearRgb {
    /// Convert from sRGB to linear RGB using the IEC 61966-2-1 transfer.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit() {
        let c = LinearRgb::new(-0.25, 0.5, 1.75).clamp_unit();
        assert_eq!(c, LinearRgb::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_gamma_decode() {
        let linear = LinearRgb::from(Srgb::new(0.5, 0.5, 0.5));
        assert!((linear.r - 0.214041140482).abs() < 1e-9);
    }
}
