use thiserror::Error;

use crate::core::actions::sample_point::ports::uniform_source::UniformSource;
use crate::core::actions::sample_point::sample_point::{SamplePointError, sample_point};
use crate::core::fractals::logistic_basins::accumulator::BasinAccumulator;
use crate::core::fractals::logistic_basins::basins_config::BasinsConfig;
use crate::core::fractals::logistic_basins::errors::LogisticBasinsError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunTrialsError {
    #[error(transparent)]
    Config(#[from] LogisticBasinsError),

    #[error("trial {trial}: {source}")]
    Sample {
        trial: u32,
        #[source]
        source: SamplePointError,
    },
}

/// Runs `config.trials()` trials one after another: sample a fresh point,
/// classify it, merge the result. Each trial sees every earlier merge.
pub fn run_trials<S>(config: &BasinsConfig, source: &mut S) -> Result<BasinAccumulator, RunTrialsError>
where
    S: UniformSource + ?Sized,
{
    let classifier = config.build_classifier()?;
    let params = classifier.params();
    let mut accumulator = BasinAccumulator::new();

    log::debug!(
        "running {} trials for {} at depth {}, sample half-width {}",
        config.trials(),
        params.label(),
        classifier.depth(),
        params.sample_half_width()
    );

    for trial in 0..config.trials() {
        let seed = sample_point(params, &accumulator, &mut *source, config.limits())
            .map_err(|source| RunTrialsError::Sample { trial, source })?;
        let result = classifier.classify(seed);

        log::trace!(
            "trial {trial}: {seed:?} {:?} after {} points",
            result.classification,
            result.trajectory.len()
        );

        accumulator.merge(&result);
    }

    log::info!(
        "{}: {} bounded, {} escaping points from {} trials",
        params.label(),
        accumulator.bounded().len(),
        accumulator.escaping().len(),
        accumulator.trials()
    );

    Ok(accumulator)
}
