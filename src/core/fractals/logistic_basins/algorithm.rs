use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::trajectory::Trajectory;
use crate::core::fractals::logistic_basins::classification::{Classification, ClassifiedSeed};
use crate::core::fractals::logistic_basins::errors::LogisticBasinsError;
use crate::core::fractals::logistic_basins::params::LogisticParams;
use std::ops::ControlFlow;

#[derive(Debug, Clone, PartialEq)]
pub struct BasinClassifier {
    params: LogisticParams,
    depth: u32,
}

impl BasinClassifier {
    pub fn new(params: LogisticParams, depth: u32) -> Result<Self, LogisticBasinsError> {
        if depth == 0 {
            return Err(LogisticBasinsError::ZeroDepth);
        }

        Ok(Self { params, depth })
    }

    #[must_use]
    pub fn params(&self) -> &LogisticParams {
        &self.params
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Iterates `seed` up to `depth` times, stopping at the first iterate
    /// outside the bounding circle. That iterate is the last one recorded.
    #[must_use]
    pub fn classify(&self, seed: Point) -> ClassifiedSeed {
        let mut trajectory = Trajectory::from_seed(seed, self.depth as usize + 1);

        let outcome = (0..self.depth).try_fold(Complex::from(seed), |z, _| {
            let next = self.params.step(z);
            trajectory.push(next.into());

            if self.params.contains(next.into()) {
                ControlFlow::Continue(next)
            } else {
                ControlFlow::Break(next)
            }
        });

        // depth >= 1, so a completed fold always ends on an iterate that
        // passed the bound test.
        let classification = match outcome {
            ControlFlow::Break(_) => Classification::Escaping,
            ControlFlow::Continue(_) => Classification::Bounded,
        };

        ClassifiedSeed {
            classification,
            trajectory,
        }
    }
}
