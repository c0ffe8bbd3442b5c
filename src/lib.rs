mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::basins::CliBasinsController;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::run_trials::run_trials::{RunTrialsError, run_trials};
pub use crate::core::actions::sample_point::ports::classified_points::ClassifiedPoints;
pub use crate::core::actions::sample_point::ports::uniform_source::{RngSource, UniformSource};
pub use crate::core::actions::sample_point::sample_point::{SampleLimits, SamplePointError, sample_point};
pub use crate::core::data::basin_plot::BasinPlot;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::trajectory::Trajectory;
pub use crate::core::fractals::logistic_basins::accumulator::BasinAccumulator;
pub use crate::core::fractals::logistic_basins::algorithm::BasinClassifier;
pub use crate::core::fractals::logistic_basins::basins_config::BasinsConfig;
pub use crate::core::fractals::logistic_basins::bound::{
    QuadraticForm, escape_radius, in_bounding_circle, sample_half_width, to_quadratic,
};
pub use crate::core::fractals::logistic_basins::classification::{Classification, ClassifiedSeed};
pub use crate::core::fractals::logistic_basins::errors::LogisticBasinsError;
pub use crate::core::fractals::logistic_basins::params::LogisticParams;
pub use crate::presenters::file::ppm::PpmFilePresenter;
