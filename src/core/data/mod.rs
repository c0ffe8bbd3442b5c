pub mod basin_plot;
pub mod complex;
pub mod complex_rect;
pub mod point;
pub mod trajectory;
