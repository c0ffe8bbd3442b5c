use crate::core::data::point::Point;

/// A seed followed by its iterates. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Trajectory {
    #[must_use]
    pub fn from_seed(seed: Point, capacity: usize) -> Self {
        let mut points = Vec::with_capacity(capacity.max(1));
        points.push(seed);

        Self { points }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    #[must_use]
    pub fn seed(&self) -> Point {
        self.points[0]
    }

    #[must_use]
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
