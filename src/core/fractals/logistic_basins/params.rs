use crate::core::{
    data::{complex::Complex, complex_rect::ComplexRect, point::Point},
    fractals::logistic_basins::{
        bound::{in_bounding_circle, sample_half_width},
        errors::LogisticBasinsError,
    },
};

/// The parameter `r` of one logistic map, together with the sampling box it
/// determines.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LogisticParams {
    r: Complex,
    sample_region: ComplexRect,
}

impl LogisticParams {
    pub fn new(r: Complex) -> Result<Self, LogisticBasinsError> {
        if !r.is_finite() || r == Complex::ZERO {
            return Err(LogisticBasinsError::InvalidParameter { r });
        }

        let sample_region = ComplexRect::centered_square(sample_half_width(r))?;

        Ok(Self { r, sample_region })
    }

    pub fn real(r: f64) -> Result<Self, LogisticBasinsError> {
        Self::new(Complex::from_real(r))
    }

    #[must_use]
    pub fn r(&self) -> Complex {
        self.r
    }

    #[must_use]
    pub fn sample_region(&self) -> ComplexRect {
        self.sample_region
    }

    #[must_use]
    pub fn sample_half_width(&self) -> f64 {
        self.sample_region.bottom_right().real
    }

    /// One application of `z -> r·z·(1 - z)`.
    #[must_use]
    pub fn step(&self, z: Complex) -> Complex {
        self.r * z * (Complex::ONE - z)
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        in_bounding_circle(point.into(), self.r)
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("r = {}", self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_constructor() {
        let params = LogisticParams::real(3.0).unwrap();

        assert_eq!(params.r(), Complex::from_real(3.0));
        assert!((params.sample_half_width() - (2.0 / 3.0 + 0.5)).abs() < 1e-12);
        assert_eq!(params.sample_region().width(), 2.0 * params.sample_half_width());
    }

    #[test]
    fn test_zero_parameter_is_rejected() {
        assert_eq!(
            LogisticParams::real(0.0),
            Err(LogisticBasinsError::InvalidParameter { r: Complex::ZERO })
        );
    }

    #[test]
    fn test_non_finite_parameter_is_rejected() {
        assert!(LogisticParams::real(f64::NAN).is_err());
        assert!(LogisticParams::real(f64::INFINITY).is_err());
        assert!(
            LogisticParams::new(Complex {
                real: 1.0,
                imag: f64::NEG_INFINITY
            })
            .is_err()
        );
    }

    #[test]
    fn test_step_matches_logistic_map() {
        let params = LogisticParams::real(3.0).unwrap();

        // 3 * 0.5 * 0.5 = 0.75
        assert_eq!(params.step(Complex::from_real(0.5)), Complex::from_real(0.75));
        // 3(1 + i)(-i) = 3 - 3i
        assert_eq!(
            params.step(Complex { real: 1.0, imag: 1.0 }),
            Complex { real: 3.0, imag: -3.0 }
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(LogisticParams::real(3.0).unwrap().label(), "r = 3");
        assert_eq!(
            LogisticParams::new(Complex { real: 2.0, imag: 0.5 })
                .unwrap()
                .label(),
            "r = 2+0.5i"
        );
    }
}
