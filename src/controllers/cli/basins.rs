use std::{path::Path, time::Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
    controllers::ports::file_presenter::FilePresenterPort,
    core::{
        actions::{
            run_trials::run_trials::run_trials,
            sample_point::ports::uniform_source::RngSource,
        },
        data::basin_plot::BasinPlot,
        fractals::logistic_basins::{accumulator::BasinAccumulator, basins_config::BasinsConfig},
    },
};

pub struct CliBasinsController<P: FilePresenterPort> {
    presenter: P,
    config: BasinsConfig,
    seed: Option<u64>,
    basins: Option<BasinAccumulator>,
}

impl<P: FilePresenterPort> CliBasinsController<P> {
    pub fn new(presenter: P, config: BasinsConfig) -> Self {
        Self {
            presenter,
            config,
            seed: None,
            basins: None,
        }
    }

    /// Fixes the random seed so repeated runs sample the same points.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut source = RngSource::new(rng);
        let params = self.config.params();

        println!("Sampling logistic map basins, {}...", params.label());
        println!("Depth: {}", self.config.depth());
        println!("Trials: {}", self.config.trials());
        println!("Sample box half-width: {:.4}", params.sample_half_width());

        let start = Instant::now();
        let basins = run_trials(&self.config, &mut source)?;
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);
        println!(
            "Bounded: {}, escaping: {}",
            basins.bounded().len(),
            basins.escaping().len()
        );

        self.basins = Some(basins);

        Ok(())
    }

    #[must_use]
    pub fn basins(&self) -> Option<&BasinAccumulator> {
        self.basins.as_ref()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(basins) = &self.basins {
            let params = self.config.params();
            let plot = BasinPlot {
                points: basins.bounded(),
                region: params.sample_region(),
                label: params.label(),
            };

            self.presenter.present(&plot, filepath)?
        }

        Ok(())
    }
}
