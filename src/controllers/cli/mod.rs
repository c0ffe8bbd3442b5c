pub mod basins;
