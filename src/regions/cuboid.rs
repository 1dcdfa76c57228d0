//! Axis-aligned box regions.

use std::collections::BTreeSet;

use crate::core::{Vector2, Vector3};
use crate::world::WorldRef;

use super::footprint::{Footprint, GridRect};

/// A closed axis-aligned box of blocks.
///
/// Both corners are inclusive, so a cuboid whose corners coincide still covers one
/// block. `min` is component-wise less than or equal to `max`; the factory guarantees
/// this, so nothing here re-checks it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cuboid {
    world: WorldRef,
    min: Vector3,
    max: Vector3,
}

impl Cuboid {
    /// Assumes `min <= max` on every axis.
    pub(crate) fn new(world: WorldRef, min: Vector3, max: Vector3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Cuboid { world, min, max }
    }

    /// The world this cuboid lives in.
    pub fn world(&self) -> &WorldRef {
        &self.world
    }

    /// Lowest corner, inclusive.
    pub fn min(&self) -> Vector3 {
        self.min
    }

    /// Highest corner, inclusive.
    pub fn max(&self) -> Vector3 {
        self.max
    }

    /// The `(x, z)` rectangle under the box.
    pub fn footprint_bounds(&self) -> GridRect {
        GridRect::new(self.min.to_vector2(), self.max.to_vector2())
    }

    /// Inclusive block count: `(dx + 1) * (dy + 1) * (dz + 1)`, saturating at `i64::MAX`.
    pub fn volume(&self) -> i64 {
        let span = |lo: i32, hi: i32| i64::from(hi) - i64::from(lo) + 1;
        span(self.min.x, self.max.x)
            .saturating_mul(span(self.min.y, self.max.y))
            .saturating_mul(span(self.min.z, self.max.z))
    }

    /// Whether the column lies within the box's x and z ranges, edges included.
    pub fn contains_2d(&self, point: Vector2) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.z <= point.z
            && point.z <= self.max.z
    }

    /// The eight box corners. Flat cuboids collapse duplicate corners.
    pub fn vertices(&self) -> BTreeSet<Vector3> {
        let (lo, hi) = (self.min, self.max);
        [lo.x, hi.x]
            .into_iter()
            .flat_map(|x| [lo.y, hi.y].into_iter().map(move |y| (x, y)))
            .flat_map(|(x, y)| [lo.z, hi.z].into_iter().map(move |z| Vector3::new(x, y, z)))
            .collect()
    }

    /// Every column of [`footprint_bounds`](Self::footprint_bounds).
    pub fn footprint(&self) -> Footprint {
        Footprint::filled(self.footprint_bounds())
    }
}
