pub mod accumulator;
pub mod algorithm;
pub mod basins_config;
pub mod bound;
pub mod classification;
pub mod errors;
pub mod params;
