//! sRGB color type
//!
//! sRGB is the standard color space for display and storage. Key stops enter
//! the pipeline as sRGB and warped stops leave it as sRGB; the `rgb` blending
//! mode operates on these gamma-encoded values directly.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::linear_rgb::LinearRgb;
use super::transfer::linear_to_srgb;

/// A color in sRGB color space.
///
/// Values are gamma-encoded and in the range 0.0..=1.0 (mapping to 0..255
/// for 8-bit). Use this type for input/output; convert to [`LinearRgb`]
/// before any perceptual color math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// The canonical default color (`#000000`), returned wherever the
    /// pipeline has nothing better to offer (empty stop lists, unparseable
    /// colors).
    pub const BLACK: Srgb = Srgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Create a new Srgb color from float values in 0.0..=1.0.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use warp_gradient::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range, so every color leaves
    /// the pipeline inside the 8-bit sRGB gamut.
    ///
    /// # Example
    /// ```
    /// use warp_gradient::Srgb;
    /// let color = Srgb::new(1.0, 0.5, 0.0);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Snap every channel to the nearest 8-bit representable value.
    ///
    /// Blended colors are quantized through this before they become warped
    /// stops, so the emitted color equals its own hex rendering exactly.
    #[inline]
    pub fn quantize(self) -> Self {
        Self::from_bytes(self.to_bytes())
    }

    /// Parse a hex color, falling back to [`Srgb::BLACK`] on any error.
    ///
    /// The gradient core operates in a total-function regime with no error
    /// reporting; this is the silent-defaulting entry point. Use the
    /// [`FromStr`] impl when the caller wants to see the failure.
    ///
    /// # Example
    /// ```
    /// use warp_gradient::Srgb;
    /// assert_eq!(Srgb::from_hex_lossy("#FF0000"), Srgb::from_u8(255, 0, 0));
    /// assert_eq!(Srgb::from_hex_lossy("not a color"), Srgb::BLACK);
    /// ```
    pub fn from_hex_lossy(s: &str) -> Self {
        s.parse().unwrap_or(Self::BLACK)
    }
}

impl From<LinearRgb> for Srgb {
    /// Convert from linear RGB to sRGB using the IEC 61966-2-1 transfer.
    ///
    /// The input is expected to be in 0.0..=1.0; clamp out-of-gamut values
    /// with [`LinearRgb::clamp_unit`] first.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}

impl fmt::Display for Srgb {
    /// Format as a lowercase `#rrggbb` hex string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB` (shorthand digits
    /// expand to pairs). Parsing is case-insensitive; leading and trailing
    /// whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use warp_gradient::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "#F00".parse().unwrap();
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        // Byte indexing below; multi-byte input can never be valid hex anyway
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
