use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRectError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LogisticBasinsError {
    #[error("Depth must be greater than zero")]
    ZeroDepth,

    #[error("Number of trials must be greater than zero")]
    ZeroTrials,

    #[error("Maximum sample attempts must be greater than zero")]
    ZeroMaxAttempts,

    #[error("Parameter r must be finite and non-zero, got {r}")]
    InvalidParameter { r: Complex },

    #[error("Sampling region is invalid: {0}")]
    InvalidRegion(#[from] ComplexRectError),
}
