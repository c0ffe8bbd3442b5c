use crate::core::data::complex::Complex;

/// A sampled point `(x, y)`, read as the complex number `x + iy`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub(crate) fn key(&self) -> PointKey {
        PointKey(coordinate_bits(self.x), coordinate_bits(self.y))
    }
}

impl From<Complex> for Point {
    fn from(value: Complex) -> Self {
        Self {
            x: value.real,
            y: value.imag,
        }
    }
}

impl From<Point> for Complex {
    fn from(value: Point) -> Self {
        Self {
            real: value.x,
            imag: value.y,
        }
    }
}

/// Hashable identity of a [`Point`]: equal coordinates give equal keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct PointKey(u64, u64);

fn coordinate_bits(value: f64) -> u64 {
    // -0.0 == 0.0
    if value == 0.0 { 0 } else { value.to_bits() }
}
