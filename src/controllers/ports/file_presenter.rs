use std::path::Path;

use crate::core::data::basin_plot::BasinPlot;

pub trait FilePresenterPort {
    fn present(&self, plot: &BasinPlot<'_>, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
