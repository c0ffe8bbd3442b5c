pub mod run_trials;
pub mod sample_point;
