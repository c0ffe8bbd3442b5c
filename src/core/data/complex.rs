use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    pub const ONE: Self = Self {
        real: 1.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn from_real(real: f64) -> Self {
        Self { real, imag: 0.0 }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// `hypot` keeps the modulus finite where squaring would overflow.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

// Real values print bare ("3"), others as "a+bi" / "a-bi".
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag == 0.0 {
            write!(f, "{}", self.real)
        } else if self.imag.is_sign_negative() {
            write!(f, "{}-{}i", self.real, -self.imag)
        } else {
            write!(f, "{}+{}i", self.real, self.imag)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex {
            real: 3.0,
            imag: 4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude() {
        let c = Complex {
            real: -3.0,
            imag: 4.0,
        };
        assert_eq!(c.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_does_not_overflow_for_large_parts() {
        let c = Complex {
            real: 1e200,
            imag: 1e200,
        };
        assert!(c.magnitude().is_finite());
        assert!(c.magnitude_squared().is_infinite());
    }

    #[test]
    fn test_magnitude_of_nan_is_nan() {
        let c = Complex {
            real: f64::NAN,
            imag: 1.0,
        };
        assert!(c.magnitude().is_nan());
    }

    #[test]
    fn test_add() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: 4.0,
        };
        let result = a + b;
        assert_eq!(result.real, 4.0);
        assert_eq!(result.imag, 6.0);
    }

    #[test]
    fn test_sub() {
        // 1 - (1 + i) = -i
        let result = Complex::ONE
            - Complex {
                real: 1.0,
                imag: 1.0,
            };
        assert_eq!(result.real, 0.0);
        assert_eq!(result.imag, -1.0);
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = 3 + 10i - 8 = -5 + 10i
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: 4.0,
        };
        let result = a * b;
        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 10.0);
    }

    #[test]
    fn test_mul_by_zero() {
        let a = Complex {
            real: 5.0,
            imag: 3.0,
        };
        let result = a * Complex::ZERO;
        assert_eq!(result.real, 0.0);
        assert_eq!(result.imag, 0.0);
    }

    #[test]
    fn test_scale() {
        let c = Complex {
            real: 3.0,
            imag: -1.0,
        }
        .scale(0.25);
        assert_eq!(c.real, 0.75);
        assert_eq!(c.imag, -0.25);
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::ONE.is_finite());
        assert!(!Complex::from_real(f64::INFINITY).is_finite());
        assert!(
            !Complex {
                real: 0.0,
                imag: f64::NAN
            }
            .is_finite()
        );
    }

    #[test]
    fn test_display_real_has_no_imaginary_part() {
        assert_eq!(Complex::from_real(3.0).to_string(), "3");
        assert_eq!(Complex::from_real(3.5).to_string(), "3.5");
    }

    #[test]
    fn test_display_complex() {
        let positive = Complex {
            real: 3.0,
            imag: 1.0,
        };
        let negative = Complex {
            real: 3.0,
            imag: -0.5,
        };
        assert_eq!(positive.to_string(), "3+1i");
        assert_eq!(negative.to_string(), "3-0.5i");
    }
}
