use crate::core::{
    actions::sample_point::sample_point::SampleLimits,
    data::complex::Complex,
    fractals::logistic_basins::{
        algorithm::BasinClassifier, errors::LogisticBasinsError, params::LogisticParams,
    },
};

const DEFAULT_PARAMETER: f64 = 3.0;
const DEFAULT_DEPTH: u32 = 15;
const DEFAULT_TRIALS: u32 = 20_000;

/// Settings for one Monte Carlo run. The builders validate each value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasinsConfig {
    params: LogisticParams,
    depth: u32,
    trials: u32,
    limits: SampleLimits,
}

impl Default for BasinsConfig {
    fn default() -> Self {
        Self {
            params: default_params(),
            depth: DEFAULT_DEPTH,
            trials: DEFAULT_TRIALS,
            limits: SampleLimits::default(),
        }
    }
}

fn default_params() -> LogisticParams {
    LogisticParams::real(DEFAULT_PARAMETER).expect("default logistic parameter is valid")
}

impl BasinsConfig {
    pub fn with_parameter(mut self, r: Complex) -> Result<Self, LogisticBasinsError> {
        self.params = LogisticParams::new(r)?;
        Ok(self)
    }

    pub fn with_depth(mut self, depth: u32) -> Result<Self, LogisticBasinsError> {
        if depth == 0 {
            return Err(LogisticBasinsError::ZeroDepth);
        }

        self.depth = depth;
        Ok(self)
    }

    pub fn with_trials(mut self, trials: u32) -> Result<Self, LogisticBasinsError> {
        if trials == 0 {
            return Err(LogisticBasinsError::ZeroTrials);
        }

        self.trials = trials;
        Ok(self)
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Result<Self, LogisticBasinsError> {
        if max_attempts == 0 {
            return Err(LogisticBasinsError::ZeroMaxAttempts);
        }

        self.limits.max_attempts = Some(max_attempts);
        Ok(self)
    }

    #[must_use]
    pub fn without_origin_probe(mut self) -> Self {
        self.limits.probe_origin = false;
        self
    }

    #[must_use]
    pub fn params(&self) -> &LogisticParams {
        &self.params
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn trials(&self) -> u32 {
        self.trials
    }

    #[must_use]
    pub fn limits(&self) -> SampleLimits {
        self.limits
    }

    pub(crate) fn build_classifier(&self) -> Result<BasinClassifier, LogisticBasinsError> {
        BasinClassifier::new(self.params, self.depth)
    }
}
