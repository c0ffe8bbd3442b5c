use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;

/// What a presenter receives at the end of a run: the bounded basin, the
/// region it was sampled from and a title.
#[derive(Debug, Clone, PartialEq)]
pub struct BasinPlot<'a> {
    pub points: &'a [Point],
    pub region: ComplexRect,
    pub label: String,
}
