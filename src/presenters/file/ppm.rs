use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::basin_plot::BasinPlot;
use crate::core::util::complex_to_pixel_index::{PixelGrid, complex_to_pixel_index};
use rayon::prelude::*;
use std::io::Write;
use std::path::Path;

const DEFAULT_SIZE: u32 = 800;
const BACKGROUND: [u8; 3] = [255, 255, 255];
const POINT_COLOUR: [u8; 3] = [0, 128, 0];

/// Scatter plot of a basin as a square binary PPM, one pixel per point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmFilePresenter {
    size: u32,
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, plot: &BasinPlot<'_>, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;

        // PPM header: P6 means binary RGB, then the label as a comment,
        // width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "# {}", plot.label)?;
        writeln!(file, "{} {}", self.size, self.size)?;
        writeln!(file, "255")?;
        file.write_all(&self.render(plot))?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self { size: DEFAULT_SIZE }
    }

    pub fn with_size(size: u32) -> Self {
        Self { size: size.max(2) }
    }

    /// RGB bytes, row-major with the largest imaginary part on top.
    #[must_use]
    pub fn render(&self, plot: &BasinPlot<'_>) -> Vec<u8> {
        let grid = PixelGrid {
            width: self.size,
            height: self.size,
        };

        let pixels: Vec<usize> = plot
            .points
            .par_iter()
            .filter_map(|point| complex_to_pixel_index(*point, plot.region, grid))
            .collect();

        let mut buffer = BACKGROUND.repeat(self.size as usize * self.size as usize);
        for index in pixels {
            buffer[index * 3..index * 3 + 3].copy_from_slice(&POINT_COLOUR);
        }

        buffer
    }
}
