use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;

/// Size of a raster in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pub width: u32,
    pub height: u32,
}

/// Row-major index of the pixel nearest to `point`, with the imaginary axis
/// pointing up. `None` for points outside `region`.
#[must_use]
pub fn complex_to_pixel_index(point: Point, region: ComplexRect, grid: PixelGrid) -> Option<usize> {
    if !region.contains_point(point) || grid.width == 0 || grid.height == 0 {
        return None;
    }

    let relative_x = (point.x - region.top_left().real) / region.width();
    let relative_y = (region.bottom_right().imag - point.y) / region.height();
    let column = (relative_x * f64::from(grid.width - 1)).round() as usize;
    let row = (relative_y * f64::from(grid.height - 1)).round() as usize;

    Some(row * grid.width as usize + column)
}
