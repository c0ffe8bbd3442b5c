pub mod logistic_basins;
