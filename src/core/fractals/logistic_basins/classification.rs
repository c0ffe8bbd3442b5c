use crate::core::data::{point::Point, trajectory::Trajectory};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Classification {
    Bounded,
    Escaping,
}

/// Outcome of iterating one seed.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedSeed {
    pub classification: Classification,
    pub trajectory: Trajectory,
}

impl ClassifiedSeed {
    #[must_use]
    pub fn seed(&self) -> Point {
        self.trajectory.seed()
    }

    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.classification == Classification::Bounded
    }

    /// The points that belong in the matching basin: the seed alone when
    /// bounded, the whole trajectory when escaping.
    #[must_use]
    pub fn basin_points(&self) -> &[Point] {
        match self.classification {
            Classification::Bounded => &self.trajectory.points()[..1],
            Classification::Escaping => self.trajectory.points(),
        }
    }
}
