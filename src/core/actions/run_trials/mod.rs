pub mod run_trials;
