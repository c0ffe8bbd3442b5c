use thiserror::Error;

use crate::core::actions::sample_point::ports::classified_points::ClassifiedPoints;
use crate::core::actions::sample_point::ports::uniform_source::UniformSource;
use crate::core::data::point::Point;
use crate::core::fractals::logistic_basins::params::LogisticParams;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SamplePointError {
    #[error("no acceptable point found after {attempts} attempts")]
    Exhausted { attempts: u64 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SampleLimits {
    /// Examine the origin before drawing anything.
    pub probe_origin: bool,
    /// `None` searches until a point is accepted.
    pub max_attempts: Option<u64>,
}

impl Default for SampleLimits {
    fn default() -> Self {
        Self {
            probe_origin: true,
            max_attempts: None,
        }
    }
}

/// Rejection-samples a point from the square `params.sample_region()` that
/// lies inside the bounding circle and has not been classified yet.
///
/// Without `max_attempts` this can loop for as long as the acceptance
/// region stays empty.
pub fn sample_point<S, C>(
    params: &LogisticParams,
    classified: &C,
    source: &mut S,
    limits: SampleLimits,
) -> Result<Point, SamplePointError>
where
    S: UniformSource + ?Sized,
    C: ClassifiedPoints + ?Sized,
{
    let region = params.sample_region();
    let (low, high) = (region.top_left(), region.bottom_right());

    let mut candidate = limits.probe_origin.then_some(Point::ORIGIN);
    let mut attempts: u64 = 0;

    loop {
        if let Some(point) = candidate {
            if !classified.is_classified(point) && params.contains(point) {
                return Ok(point);
            }
        }

        if limits.max_attempts.is_some_and(|max| attempts >= max) {
            log::warn!("sampling gave up after {attempts} attempts for {}", params.label());
            return Err(SamplePointError::Exhausted { attempts });
        }

        let x = source.next_uniform(low.real, high.real);
        let y = source.next_uniform(low.imag, high.imag);
        candidate = Some(Point::new(x, y));
        attempts += 1;
    }
}
