//! Adaptive abscissa placement
//!
//! The warped gradient is rendered as a piecewise-linear gradient, so stops
//! must cluster where the easing curve bends the color progression fastest.
//! The sampler partitions [0,1] into gaps of equal arc mass: the curve's
//! rate magnitude is probed on a fixed grid, integrated per probe interval
//! (trapezoid rule), and an output abscissa is emitted every time the
//! running mass crosses a multiple of `total / (samples - 1)`.
//!
//! The result is deterministic: identical inputs produce bit-identical
//! output across runs.

use crate::curve::EasingCurve;

/// Number of equally spaced probe intervals on [0,1].
pub const PROBE_COUNT: usize = 100;

/// Distribute `samples` abscissae over [0,1] by the curve's arc measure.
///
/// Guarantees, for `samples >= 2` (smaller values are clamped to 2):
///
/// - positions are non-decreasing
/// - first position is 0.0 and last is 1.0
/// - output length is `samples` or `samples + 1`
///
/// A linear curve yields an approximately uniform grid; curves with sharp
/// acceleration concentrate positions in their steep regions.
pub fn adaptive_samples(curve: &EasingCurve, samples: usize) -> Vec<f64> {
    let samples = samples.max(2);
    let gaps = (samples - 1) as f64;
    let step = 1.0 / PROBE_COUNT as f64;

    let rates: Vec<f64> = (0..=PROBE_COUNT)
        .map(|i| curve.rate_magnitude(i as f64 * step))
        .collect();

    // Trapezoid mass per probe interval. rate_magnitude is at least 1, so
    // every interval carries positive mass and the total is positive.
    let masses: Vec<f64> = rates
        .windows(2)
        .map(|pair| 0.5 * (pair[0] + pair[1]) * step)
        .collect();
    let total: f64 = masses.iter().sum();
    let per_gap = total / gaps;

    let mut positions = vec![0.0];
    let mut accumulated = 0.0;
    let mut crossing = 1_usize;
    for (i, &mass) in masses.iter().enumerate() {
        while crossing < samples && crossing as f64 * per_gap <= accumulated + mass {
            let frac = (crossing as f64 * per_gap - accumulated) / mass;
            positions.push((i as f64 + frac) * step);
            crossing += 1;
        }
        accumulated += mass;
    }

    if positions.last().is_some_and(|&last| last < 1.0) {
        positions.push(1.0);
    }
    // Pathological curves can overfill; keep the bound and the endpoint.
    if positions.len() > samples + 1 {
        positions.truncate(samples + 1);
        if let Some(last) = positions.last_mut() {
            *last = 1.0;
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Point;

    fn assert_invariants(positions: &[f64], samples: usize) {
        assert!(positions.len() >= samples && positions.len() <= samples + 1);
        assert_eq!(positions[0], 0.0);
        assert_eq!(*positions.last().unwrap(), 1.0);
        for pair in positions.windows(2) {
            assert!(pair[1] >= pair[0], "positions decreasing: {positions:?}");
        }
    }

    #[test]
    fn test_linear_two_samples_is_exact() {
        let positions = adaptive_samples(&EasingCurve::linear(), 2);
        assert_eq!(positions, vec![0.0, 1.0]);
    }

    #[test]
    fn test_linear_three_samples_hits_midpoint() {
        let positions = adaptive_samples(&EasingCurve::linear(), 3);
        assert_eq!(positions.len(), 3);
        assert!(
            (positions[1] - 0.5).abs() < 1e-6,
            "midpoint at {}",
            positions[1]
        );
        assert_eq!(positions[2], 1.0);
    }

    #[test]
    fn test_linear_is_approximately_uniform() {
        let samples = 11;
        let positions = adaptive_samples(&EasingCurve::linear(), samples);
        assert_invariants(&positions, samples);
        for (i, &x) in positions.iter().take(samples).enumerate() {
            let expected = i as f64 / (samples - 1) as f64;
            assert!(
                (x - expected).abs() < 0.02,
                "position {i} = {x}, expected ~{expected}"
            );
        }
    }

    #[test]
    fn test_invariants_across_curves_and_counts() {
        let curves = [
            EasingCurve::linear(),
            EasingCurve::smooth(),
            EasingCurve::ease_in(),
            EasingCurve::ease_out(),
            EasingCurve::ease_in_out(),
            EasingCurve::new(Point::new(0.9, 0.0), Point::new(0.1, 1.0)),
            EasingCurve::new(Point::new(0.3, -0.8), Point::new(0.7, 1.8)),
        ];
        for curve in curves {
            for samples in [2, 3, 5, 10, 16, 64] {
                let positions = adaptive_samples(&curve, samples);
                assert_invariants(&positions, samples);
            }
        }
    }

    #[test]
    fn test_sample_count_clamped_to_two() {
        assert_invariants(&adaptive_samples(&EasingCurve::ease_in(), 0), 2);
        assert_invariants(&adaptive_samples(&EasingCurve::ease_in(), 1), 2);
    }

    #[test]
    fn test_ease_in_clusters_near_end() {
        // Slow start, fast finish: more stops land in the second half
        let positions = adaptive_samples(&EasingCurve::ease_in(), 16);
        let late = positions.iter().filter(|&&x| x > 0.5).count();
        let early = positions.iter().filter(|&&x| x < 0.5).count();
        assert!(
            late > early,
            "expected clustering near x=1: {early} early vs {late} late"
        );
    }

    #[test]
    fn test_ease_out_clusters_near_start() {
        let positions = adaptive_samples(&EasingCurve::ease_out(), 16);
        let late = positions.iter().filter(|&&x| x > 0.5).count();
        let early = positions.iter().filter(|&&x| x < 0.5).count();
        assert!(
            early > late,
            "expected clustering near x=0: {early} early vs {late} late"
        );
    }

    #[test]
    fn test_determinism() {
        let curve = EasingCurve::ease_in_out();
        let a = adaptive_samples(&curve, 32);
        let b = adaptive_samples(&curve, 32);
        assert_eq!(a, b);
        // Bit-identical, not merely approximately equal
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}
