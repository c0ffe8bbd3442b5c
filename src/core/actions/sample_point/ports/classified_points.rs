use crate::core::data::point::Point;

pub trait ClassifiedPoints {
    fn is_classified(&self, point: Point) -> bool;
}

impl<F> ClassifiedPoints for F
where
    F: Fn(Point) -> bool,
{
    #[inline]
    fn is_classified(&self, point: Point) -> bool {
        self(point)
    }
}
