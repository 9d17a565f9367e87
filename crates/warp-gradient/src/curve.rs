//! Cubic Bézier easing curves
//!
//! An easing curve is a planar cubic Bézier through (0,0) and (1,1) with two
//! free control points, the same family CSS `cubic-bezier()` timing functions
//! use. The solver inverts X(t) to evaluate the curve as a function y(x),
//! following the WebKit approach: Newton-Raphson seeded at t = x with a
//! bisection fallback when the iteration degenerates.
//!
//! Control points may lie outside the unit square, and X(t) need not be
//! monotone; every finite input produces a finite output.

/// A 2D point, used for curve control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tolerance on |X(t) - x| for both Newton iteration and bisection.
const SOLVE_TOLERANCE: f64 = 1e-6;

/// Below this derivative magnitude a Newton step is abandoned.
const DERIVATIVE_EPSILON: f64 = 1e-6;

/// Newton-Raphson iteration budget before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;

/// Bisection halves the interval this many times; 2^-64 is far below the
/// solve tolerance for any curve with bounded control points.
const BISECTION_ITERATIONS: usize = 64;

/// Sum-of-offsets threshold under which a curve counts as the identity.
/// An epsilon test rather than exact equality, so near-linear curves
/// produced by UI rounding still take the shortcut.
const LINEAR_EPSILON: f64 = 1e-9;

/// Cap on [`EasingCurve::rate_magnitude`], matching the sampler's probe
/// resolution. Keeps vertical tangents and stalled curves from concentrating
/// unbounded mass in a single probe interval.
const RATE_CAP: f64 = 100.0;

/// A cubic Bézier easing curve with implicit endpoints (0,0) and (1,1).
///
/// # Example
///
/// ```
/// use warp_gradient::EasingCurve;
///
/// let ease_in = EasingCurve::ease_in();
/// // Slow start: halfway along x, progression is below half
/// assert!(ease_in.solve(0.5) < 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingCurve {
    /// First control point
    pub p1: Point,
    /// Second control point
    pub p2: Point,
}

impl EasingCurve {
    /// Create a curve from two control points.
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// The identity curve: y = x.
    pub fn linear() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
    }

    /// Smooth ramp, cubic-bezier(0.4, 0, 0.2, 1).
    pub fn smooth() -> Self {
        Self::new(Point::new(0.4, 0.0), Point::new(0.2, 1.0))
    }

    /// Slow start, cubic-bezier(0.42, 0, 1, 1).
    pub fn ease_in() -> Self {
        Self::new(Point::new(0.42, 0.0), Point::new(1.0, 1.0))
    }

    /// Slow finish, cubic-bezier(0, 0, 0.58, 1).
    pub fn ease_out() -> Self {
        Self::new(Point::new(0.0, 0.0), Point::new(0.58, 1.0))
    }

    /// Slow start and finish, cubic-bezier(0.42, 0, 0.58, 1).
    pub fn ease_in_out() -> Self {
        Self::new(Point::new(0.42, 0.0), Point::new(0.58, 1.0))
    }

    /// Whether this curve is (numerically) the identity.
    pub fn is_linear(&self) -> bool {
        self.p1.x.abs() + self.p1.y.abs() + (self.p2.x - 1.0).abs() + (self.p2.y - 1.0).abs()
            < LINEAR_EPSILON
    }

    /// X(t) for t in [0,1].
    #[inline]
    fn sample_x(&self, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * self.p1.x + 3.0 * u * t * t * self.p2.x + t * t * t
    }

    /// Y(t) for t in [0,1].
    #[inline]
    fn sample_y(&self, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * self.p1.y + 3.0 * u * t * t * self.p2.y + t * t * t
    }

    /// dX/dt.
    #[inline]
    fn derivative_x(&self, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * self.p1.x + 6.0 * u * t * (self.p2.x - self.p1.x)
            + 3.0 * t * t * (1.0 - self.p2.x)
    }

    /// dY/dt.
    #[inline]
    fn derivative_y(&self, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * self.p1.y + 6.0 * u * t * (self.p2.y - self.p1.y)
            + 3.0 * t * t * (1.0 - self.p2.y)
    }

    /// Evaluate the curve as y(x).
    ///
    /// Finds the parameter t* with X(t*) = x and returns Y(t*).
    /// Edge policy: x <= 0 yields 0, x >= 1 yields 1, and the identity
    /// curve short-circuits to x.
    ///
    /// For non-monotone X(t) the returned root is whichever crossing the
    /// solver converges to; termination is guaranteed, perceptual sanity of
    /// such curves is the caller's problem.
    pub fn solve(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        if self.is_linear() {
            return x;
        }
        self.sample_y(self.solve_t(x))
    }

    /// Density proxy for the adaptive sampler: arc length per unit x,
    /// sqrt(X'² + Y'²) / |X'| = sqrt(1 + (dy/dx)²) at the parameter
    /// solving X(t) = x.
    ///
    /// Returns 1.0 at the endpoints, where standard easing curves stall
    /// (both derivatives reach zero) and the ratio is meaningless. Interior
    /// vertical tangents are capped so the result is always finite.
    pub fn rate_magnitude(&self, x: f64) -> f64 {
        if x <= 0.0 || x >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(x);
        let dx = self.derivative_x(t);
        let dy = self.derivative_y(t);
        // min() also resolves the 0/0 NaN of a fully stalled tangent to the cap
        (dx.hypot(dy) / dx.abs()).min(RATE_CAP)
    }

    /// Find t in [0,1] with X(t) ~= x.
    fn solve_t(&self, x: f64) -> f64 {
        if self.is_linear() {
            return x;
        }

        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample_x(t) - x;
            if err.abs() < SOLVE_TOLERANCE {
                return t;
            }
            let d = self.derivative_x(t);
            if d.abs() < DERIVATIVE_EPSILON {
                break;
            }
            t -= err / d;
        }

        // Newton overshot the unit interval or failed to converge
        if !(0.0..=1.0).contains(&t) || (self.sample_x(t) - x).abs() >= SOLVE_TOLERANCE {
            t = self.bisect(x);
        }
        t
    }

    /// Binary subdivision on [0,1]. X(0) = 0 < x < 1 = X(1), so a crossing
    /// always exists inside the interval even when X is not monotone.
    fn bisect(&self, x: f64) -> f64 {
        let mut lo = 0.0_f64;
        let mut hi = 1.0_f64;
        let mut t = x;
        for _ in 0..BISECTION_ITERATIONS {
            t = lo + (hi - lo) / 2.0;
            let err = self.sample_x(t) - x;
            if err.abs() < SOLVE_TOLERANCE {
                break;
            }
            if err > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
        }
        t
    }
}

impl Default for EasingCurve {
    /// Matches the gradient editor's starting curve.
    fn default() -> Self {
        Self::ease_in_out()
    }
}
