//! Oklch polar color space
//!
//! Oklch is the polar form of Oklab, representing colors as lightness,
//! chroma and hue angle. Interpolating in Oklch keeps chroma from collapsing
//! through the gray axis the way Cartesian Oklab blends can, at the cost of
//! having to pick a direction around the hue circle.
//!
//! Hue is measured in degrees and normalized to [0, 360) on conversion,
//! matching the CSS `oklch()` convention.

use super::oklab::Oklab;

/// Oklch: polar form of Oklab (Lightness, Chroma, Hue).
///
/// # Components
///
/// - `l`: Lightness (same as Oklab L)
/// - `c`: Chroma, sqrt(a² + b²), 0.0 = achromatic
/// - `h`: Hue angle in degrees, [0, 360)
///
/// # Note
///
/// For achromatic colors (c near zero) hue is undefined; the conversion
/// yields h = 0.0. Interpolation still treats that hue as real, which is the
/// documented behavior of the pipeline rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Chroma: distance from the neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue: angle in degrees, [0, 360)
    pub h: f64,
}

impl Oklch {
    /// Create a new Oklch color.
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Interpolate toward `other` with the shortest-arc hue rule.
    ///
    /// Lightness and chroma blend linearly. The hue difference is wrapped
    /// into (-180, 180] so the blend always travels the shorter way around
    /// the hue circle; the result is normalized back into [0, 360).
    pub fn lerp(self, other: Oklch, t: f64) -> Self {
        let mut dh = other.h - self.h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh <= -180.0 {
            dh += 360.0;
        }
        Self {
            l: self.l + (other.l - self.l) * t,
            c: self.c + (other.c - self.c) * t,
            h: (self.h + dh * t).rem_euclid(360.0),
        }
    }
}

impl From<Oklab> for Oklch {
    /// Convert from Oklab to Oklch (Cartesian to polar).
    ///
    /// For achromatic colors (a and b both zero), atan2 returns 0.0, which
    /// is harmless because chroma is zero as well.
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let mut h = lab.b.atan2(lab.a).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        Self { l: lab.l, c, h }
    }
}

impl From<Oklch> for Oklab {
    /// Convert from Oklch to Oklab (polar to Cartesian).
    fn from(lch: Oklch) -> Self {
        let h = lch.h.to_radians();
        Self::new(lch.l, lch.c * h.cos(), lch.c * h.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinearRgb, Srgb};

    const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

    fn oklch_of(srgb: Srgb) -> Oklch {
        Oklch::from(Oklab::from(LinearRgb::from(srgb)))
    }

    #[test]
    fn test_oklab_oklch_round_trip() {
        let test_colors = [
            Oklab::new(0.5, 0.1, 0.0),
            Oklab::new(0.5, 0.0, 0.1),
            Oklab::new(0.5, -0.1, 0.0),
            Oklab::new(0.5, 0.0, -0.1),
            Oklab::new(0.8, 0.05, 0.02),
            Oklab::new(0.2, -0.02, 0.05),
        ];

        for original in test_colors {
            let back = Oklab::from(Oklch::from(original));
            assert!(
                (original.l - back.l).abs() < ROUND_TRIP_TOLERANCE
                    && (original.a - back.a).abs() < ROUND_TRIP_TOLERANCE
                    && (original.b - back.b).abs() < ROUND_TRIP_TOLERANCE,
                "round-trip failed for {original:?}: got {back:?}"
            );
        }
    }

    #[test]
    fn test_hue_normalized_to_0_360() {
        // Blue has a negative b axis, so raw atan2 is negative
        let blue = oklch_of(Srgb::from_u8(0, 0, 255));
        assert!(
            (0.0..360.0).contains(&blue.h),
            "hue {} not normalized",
            blue.h
        );
        // Blue sits around 264 degrees in Oklch
        assert!((blue.h - 264.0).abs() < 2.0, "blue hue = {}", blue.h);
    }

    #[test]
    fn test_known_hues() {
        let red = oklch_of(Srgb::from_u8(255, 0, 0));
        assert!((red.h - 29.2).abs() < 1.0, "red hue = {}", red.h);

        let magenta = oklch_of(Srgb::from_u8(255, 0, 255));
        assert!((magenta.h - 328.4).abs() < 1.0, "magenta hue = {}", magenta.h);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Oklch::new(0.4, 0.1, 30.0);
        let b = Oklch::new(0.7, 0.2, 200.0);
        assert_eq!(a.lerp(b, 0.0), a);
        let end = a.lerp(b, 1.0);
        assert!((end.l - b.l).abs() < 1e-12);
        assert!((end.c - b.c).abs() < 1e-12);
        assert!((end.h - b.h).abs() < 1e-9);
    }

    /// Red (h ~29) to magenta (h ~328) must travel through the 0/360 seam,
    /// not across yellow and green.
    #[test]
    fn test_lerp_takes_shortest_hue_arc() {
        let red = oklch_of(Srgb::from_u8(255, 0, 0));
        let magenta = oklch_of(Srgb::from_u8(255, 0, 255));

        for i in 1..10 {
            let t = i as f64 / 10.0;
            let mid = red.lerp(magenta, t);
            assert!(
                mid.h < red.h + 1.0 || mid.h > magenta.h - 1.0,
                "hue {} at t={t} left the short arc",
                mid.h
            );
        }

        // The total hue distance traveled stays within the short arc (~61 deg)
        let mid = red.lerp(magenta, 0.5);
        let dist = (red.h - mid.h).abs().min(360.0 - (red.h - mid.h).abs());
        assert!(dist <= 31.0, "midpoint hue {} too far from red", mid.h);
    }

    #[test]
    fn test_lerp_identical_hue() {
        let a = Oklch::new(0.5, 0.1, 120.0);
        let b = Oklch::new(0.9, 0.05, 120.0);
        let mid = a.lerp(b, 0.5);
        assert!((mid.h - 120.0).abs() < 1e-12);
    }
}
