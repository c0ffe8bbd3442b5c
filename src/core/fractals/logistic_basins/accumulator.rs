use std::collections::HashSet;

use crate::core::actions::sample_point::ports::classified_points::ClassifiedPoints;
use crate::core::data::point::{Point, PointKey};
use crate::core::fractals::logistic_basins::classification::{Classification, ClassifiedSeed};

/// Insertion-ordered set of points.
#[derive(Debug, Clone, Default)]
struct PointSet {
    keys: HashSet<PointKey>,
    points: Vec<Point>,
}

impl PointSet {
    fn contains(&self, point: Point) -> bool {
        self.keys.contains(&point.key())
    }

    fn insert(&mut self, point: Point) -> bool {
        let inserted = self.keys.insert(point.key());
        if inserted {
            self.points.push(point);
        }
        inserted
    }
}

/// Every point classified during one run, split into the bounded basin
/// (seeds only) and the escaping basin (whole trajectories).
///
/// The two sets never share a point: sampled seeds are fresh, and a bounded
/// seed cannot appear inside an escaping trajectory because its own orbit
/// would then have escaped within the same depth.
#[derive(Debug, Clone, Default)]
pub struct BasinAccumulator {
    bounded: PointSet,
    escaping: PointSet,
    trials: usize,
}

impl BasinAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, result: &ClassifiedSeed) {
        let (target, other) = match result.classification {
            Classification::Bounded => (&mut self.bounded, &self.escaping),
            Classification::Escaping => (&mut self.escaping, &self.bounded),
        };

        for point in result.basin_points() {
            debug_assert!(!other.contains(*point), "{point:?} already in the other basin");
            target.insert(*point);
        }

        self.trials += 1;
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.bounded.contains(point) || self.escaping.contains(point)
    }

    #[must_use]
    pub fn bounded(&self) -> &[Point] {
        &self.bounded.points
    }

    #[must_use]
    pub fn escaping(&self) -> &[Point] {
        &self.escaping.points
    }

    /// Number of merges so far.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }
}

impl ClassifiedPoints for BasinAccumulator {
    fn is_classified(&self, point: Point) -> bool {
        self.contains(point)
    }
}
