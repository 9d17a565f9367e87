//! Oklab perceptual color space
//!
//! Oklab is a perceptual color space where Euclidean distance correlates
//! with perceived color difference, which makes per-channel linear
//! interpolation produce visually even transitions. It is the working space
//! for the `oklab` blending mode and the Cartesian half of `oklch`.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// # Note
///
/// Values are not clamped. Interpolated colors may land slightly outside
/// the sRGB gamut; the inversion path clamps in linear RGB before encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.5 to 0.5
    pub a: f64,
    /// Blue-yellow axis: typically -0.5 to 0.5
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Linearly interpolate each channel toward `other`.
    ///
    /// `t = 0.0` yields `self`, `t = 1.0` yields `other`.
    #[inline]
    pub fn lerp(self, other: Oklab, t: f64) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear RGB to Oklab.
    ///
    /// Uses the updated 2021-01-25 matrices from Björn Ottosson.
    fn from(rgb: LinearRgb) -> Self {
        // Step 1: Linear sRGB to LMS (M1 matrix)
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        // Step 2: Cube root (nonlinearity)
        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        // Step 3: LMS to Lab (M2 matrix)
        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear RGB.
    ///
    /// The result is not clamped; out-of-gamut Oklab colors produce
    /// LinearRgb values outside 0.0..=1.0.
    fn from(lab: Oklab) -> Self {
        // Step 1: Lab to LMS (inverse M2)
        let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        // Step 2: Cube (reverse nonlinearity)
        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // Step 3: LMS to linear sRGB (inverse M1)
        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Srgb;

    /// Tolerance against the palette crate (it computes in f32)
    const PALETTE_TOLERANCE: f64 = 1e-5;

    /// Tolerance for round-trip through both matrix transforms
    const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as PaletteOklab};

        let test_colors = [
            (1.0, 0.0, 0.0), // Red
            (0.0, 1.0, 0.0), // Green
            (0.0, 0.0, 1.0), // Blue
            (0.5, 0.5, 0.5), // Mid gray
            (1.0, 1.0, 1.0), // White
            (0.0, 0.0, 0.0), // Black
        ];

        for (r, g, b) in test_colors {
            let ours = Oklab::from(LinearRgb::new(r, g, b));

            let palette_linear: LinSrgb<f32> = LinSrgb::new(r as f32, g as f32, b as f32);
            let theirs: PaletteOklab<f32> = palette_linear.into_color();

            assert!(
                approx_eq(ours.l, theirs.l as f64, PALETTE_TOLERANCE),
                "L mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                approx_eq(ours.a, theirs.a as f64, PALETTE_TOLERANCE),
                "a mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                approx_eq(ours.b, theirs.b as f64, PALETTE_TOLERANCE),
                "b mismatch for ({r}, {g}, {b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }

    #[test]
    fn test_oklab_round_trip() {
        let test_colors = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (1.0, 0.0, 1.0),
            (0.0, 1.0, 1.0),
            (0.5, 0.5, 0.5),
            (0.25, 0.25, 0.25),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
        ];

        for (r, g, b) in test_colors {
            let original = LinearRgb::new(r, g, b);
            let round_trip = LinearRgb::from(Oklab::from(original));

            assert!(
                approx_eq(original.r, round_trip.r, ROUND_TRIP_TOLERANCE)
                    && approx_eq(original.g, round_trip.g, ROUND_TRIP_TOLERANCE)
                    && approx_eq(original.b, round_trip.b, ROUND_TRIP_TOLERANCE),
                "round-trip failed for ({r}, {g}, {b}): got ({}, {}, {})",
                round_trip.r,
                round_trip.g,
                round_trip.b
            );
        }
    }

    #[test]
    fn test_oklab_known_values() {
        // White: L close to 1.0, a and b close to 0.0
        let white = Oklab::from(LinearRgb::new(1.0, 1.0, 1.0));
        assert!(approx_eq(white.l, 1.0, 1e-6), "white L = {}", white.l);
        assert!(white.a.abs() < 1e-6 && white.b.abs() < 1e-6);

        // Black: all zero
        let black = Oklab::from(LinearRgb::new(0.0, 0.0, 0.0));
        assert!(black.l.abs() < 1e-6 && black.a.abs() < 1e-6 && black.b.abs() < 1e-6);

        // Grays are achromatic
        let gray = Oklab::from(LinearRgb::new(0.5, 0.5, 0.5));
        assert!(gray.a.abs() < 1e-6 && gray.b.abs() < 1e-6);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Oklab::new(0.3, 0.1, -0.05);
        let b = Oklab::new(0.8, -0.2, 0.15);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);

        let mid = a.lerp(b, 0.5);
        assert!(approx_eq(mid.l, 0.55, 1e-12));
        assert!(approx_eq(mid.a, -0.05, 1e-12));
        assert!(approx_eq(mid.b, 0.05, 1e-12));
    }

    /// Full chain sRGB -> linear -> Oklab -> linear -> sRGB stays within
    /// 1 LSB at 8 bits.
    #[test]
    fn test_full_conversion_chain() {
        let original = Srgb::from_u8(255, 128, 64);
        let lab = Oklab::from(LinearRgb::from(original));
        let back = Srgb::from(LinearRgb::from(lab).clamp_unit());

        let original_bytes = original.to_bytes();
        let final_bytes = back.to_bytes();
        for ch in 0..3 {
            let diff = (original_bytes[ch] as i32 - final_bytes[ch] as i32).abs();
            assert!(
                diff <= 1,
                "channel {ch} differs by {diff} ({} vs {})",
                original_bytes[ch],
                final_bytes[ch]
            );
        }
    }
}
