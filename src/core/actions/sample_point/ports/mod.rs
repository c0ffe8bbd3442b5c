pub mod classified_points;
pub mod uniform_source;
