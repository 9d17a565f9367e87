//! CLI argument syntaxes for stops and curves.
//!
//! Stops arrive as `#RRGGBB@position` pairs separated by commas, e.g.
//! `#fb2380@0,#28e2fb@1`. Curves are either a preset name (`linear`,
//! `smooth`, `ease-in`, `ease-out`, `ease-in-out`) or four comma-separated
//! control coordinates `x1,y1,x2,y2` as in CSS `cubic-bezier()`.

use thiserror::Error;
use warp_gradient::{ColorStop, EasingCurve, ParseColorError, Point, Srgb};

/// Errors produced while parsing CLI gradient arguments.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid stop `{stop}`: expected `#RRGGBB@position`")]
    InvalidStop { stop: String },

    #[error("invalid color in stop `{stop}`: {source}")]
    InvalidColor {
        stop: String,
        source: ParseColorError,
    },

    #[error("invalid position `{position}` in stop `{stop}`")]
    InvalidPosition { stop: String, position: String },

    #[error(
        "invalid curve `{curve}`: expected a preset name (linear, smooth, \
         ease-in, ease-out, ease-in-out) or `x1,y1,x2,y2`"
    )]
    InvalidCurve { curve: String },
}

/// Parse a comma-separated list of `#RRGGBB@position` stops.
///
/// Ids are derived from the pair index so repeated runs are reproducible.
pub fn parse_stops(input: &str) -> Result<Vec<ColorStop>, InputError> {
    input.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(index, part)| {
            let (hex, position) = part.split_once('@').ok_or_else(|| InputError::InvalidStop {
                stop: part.to_string(),
            })?;
            let color: Srgb = hex.parse().map_err(|source| InputError::InvalidColor {
                stop: part.to_string(),
                source,
            })?;
            let position: f64 =
                position
                    .trim()
                    .parse()
                    .map_err(|_| InputError::InvalidPosition {
                        stop: part.to_string(),
                        position: position.to_string(),
                    })?;
            if !position.is_finite() {
                return Err(InputError::InvalidPosition {
                    stop: part.to_string(),
                    position: position.to_string(),
                });
            }
            Ok(ColorStop::new(format!("key-{index}"), color, position))
        })
        .collect()
}

/// Parse a curve preset name or `x1,y1,x2,y2` control coordinates.
pub fn parse_curve(input: &str) -> Result<EasingCurve, InputError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "linear" => return Ok(EasingCurve::linear()),
        "smooth" => return Ok(EasingCurve::smooth()),
        "ease-in" => return Ok(EasingCurve::ease_in()),
        "ease-out" => return Ok(EasingCurve::ease_out()),
        "ease-in-out" => return Ok(EasingCurve::ease_in_out()),
        _ => {}
    }

    let invalid = || InputError::InvalidCurve {
        curve: input.to_string(),
    };
    let coords: Vec<f64> = input
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;
    let [x1, y1, x2, y2] = coords.as_slice() else {
        return Err(invalid());
    };
    if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
        return Err(invalid());
    }
    Ok(EasingCurve::new(Point::new(*x1, *y1), Point::new(*x2, *y2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stops_basic() {
        let stops = parse_stops("#fb2380@0,#28e2fb@1").unwrap();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].color, Srgb::from_u8(0xFB, 0x23, 0x80));
        assert_eq!(stops[0].position, 0.0);
        assert_eq!(stops[1].position, 1.0);
        assert_eq!(stops[0].id, "key-0");
    }

    #[test]
    fn test_parse_stops_whitespace_and_fractions() {
        let stops = parse_stops(" #FF0000@0.3 , #00FF00@0.7 ").unwrap();
        assert_eq!(stops[0].position, 0.3);
        assert_eq!(stops[1].position, 0.7);
    }

    #[test]
    fn test_parse_stops_errors() {
        assert!(matches!(
            parse_stops("#FF0000"),
            Err(InputError::InvalidStop { .. })
        ));
        assert!(matches!(
            parse_stops("#GGGGGG@0"),
            Err(InputError::InvalidColor { .. })
        ));
        assert!(matches!(
            parse_stops("#FF0000@here"),
            Err(InputError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_parse_curve_presets() {
        assert_eq!(parse_curve("linear").unwrap(), EasingCurve::linear());
        assert_eq!(parse_curve("Ease-In-Out").unwrap(), EasingCurve::ease_in_out());
    }

    #[test]
    fn test_parse_curve_coordinates() {
        let curve = parse_curve("0.42, 0, 0.58, 1").unwrap();
        assert_eq!(curve, EasingCurve::ease_in_out());
    }

    #[test]
    fn test_parse_curve_errors() {
        assert!(parse_curve("bouncy").is_err());
        assert!(parse_curve("0.42,0,0.58").is_err());
        assert!(parse_curve("0.42,0,0.58,1,2").is_err());
        assert!(parse_curve("0.42,zero,0.58,1").is_err());
    }
}
