use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Axis-aligned region of the complex plane, `top_left` holding the minimum
/// real and imaginary parts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// The box `[-half_width, half_width]²`.
    pub fn centered_square(half_width: f64) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex {
                real: -half_width,
                imag: -half_width,
            },
            Complex {
                real: half_width,
                imag: half_width,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.real <= point.x
            && self.top_left.imag <= point.y
            && self.bottom_right.real >= point.x
            && self.bottom_right.imag >= point.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let top_left = Complex {
            real: -2.0,
            imag: -1.0,
        };
        let bottom_right = Complex {
            real: 1.0,
            imag: 1.0,
        };

        let rect = ComplexRect::new(top_left, bottom_right).unwrap();

        assert_eq!(rect.top_left(), top_left);
        assert_eq!(rect.bottom_right(), bottom_right);
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width = ComplexRect::new(Complex::ZERO, Complex { real: 0.0, imag: 1.0 });
        let negative_height =
            ComplexRect::new(Complex::ZERO, Complex { real: 1.0, imag: -1.0 });

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize {
                width: 0.0,
                height: 1.0
            })
        );
        assert_eq!(
            negative_height,
            Err(ComplexRectError::InvalidSize {
                width: 1.0,
                height: -1.0
            })
        );
    }

    #[test]
    fn test_complex_rect_rejects_infinite_size() {
        assert!(ComplexRect::centered_square(f64::INFINITY).is_err());
        assert!(ComplexRect::centered_square(f64::NAN).is_err());
    }

    #[test]
    fn test_centered_square() {
        let rect = ComplexRect::centered_square(1.5).unwrap();

        assert_eq!(rect.top_left(), Complex { real: -1.5, imag: -1.5 });
        assert_eq!(rect.bottom_right(), Complex { real: 1.5, imag: 1.5 });
        assert_eq!(rect.width(), 3.0);
        assert_eq!(rect.height(), 3.0);
    }

    #[test]
    fn test_complex_rect_contains_point() {
        let rect = ComplexRect::centered_square(1.0).unwrap();

        assert!(rect.contains_point(Point::ORIGIN));
        assert!(rect.contains_point(Point::new(-1.0, 1.0)));
        assert!(rect.contains_point(Point::new(1.0, -1.0)));
        assert!(!rect.contains_point(Point::new(1.01, 0.0)));
        assert!(!rect.contains_point(Point::new(0.0, -1.01)));
        assert!(!rect.contains_point(Point::new(f64::NAN, 0.0)));
    }
}
