//! Bounding circle for the logistic map `x -> r·x·(1 - x)`.
//!
//! With `z = r·(1/2 - x)` and `c = r·(r - 2)/4` the logistic map becomes
//! `z -> z² + c`, and an orbit of `z² + c` diverges once `|z|` exceeds
//! `max(2, |c|)`. The test below applies that threshold to the transformed
//! coordinate, so failing it means the logistic orbit of `x` escapes.

use crate::core::data::complex::Complex;

const HALF: Complex = Complex::from_real(0.5);
const TWO: Complex = Complex::from_real(2.0);
const MIN_ESCAPE_RADIUS: f64 = 2.0;

/// A point of the logistic map expressed in `z² + c` coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadraticForm {
    pub z: Complex,
    pub c: Complex,
}

#[must_use]
pub fn to_quadratic(x: Complex, r: Complex) -> QuadraticForm {
    QuadraticForm {
        z: r * (HALF - x),
        c: (r * (r - TWO)).scale(0.25),
    }
}

/// `max(2, |c·(2 - c)/4|)`, the radius `|z|` has to stay under.
#[must_use]
pub fn escape_radius(c: Complex) -> f64 {
    MIN_ESCAPE_RADIUS.max((c * (TWO - c)).scale(0.25).magnitude())
}

/// NaN and infinite values are never inside.
#[must_use]
pub fn in_bounding_circle(x: Complex, r: Complex) -> bool {
    let QuadraticForm { z, c } = to_quadratic(x, r);

    z.magnitude() < escape_radius(c)
}

/// Half-width of the square the sampler draws from: `k/|r| + 1/2` with
/// `k = max(2, |r·(2 - r)/4|)`.
#[must_use]
pub fn sample_half_width(r: Complex) -> f64 {
    let k = MIN_ESCAPE_RADIUS.max((r * (TWO - r)).scale(0.25).magnitude());

    k / r.magnitude() + 0.5
}
