//! # Regions Module
//!
//! Bank regions are named 3-D volumes on a world grid that must never share a block.
//! This module provides the geometry behind them.
//!
//! ## Architecture
//!
//! * **Region**: a closed sum of the two supported shapes with one shared query contract
//! * **Cuboid**: an axis-aligned box given by two inclusive corners
//! * **Polygonal**: a polygon footprint extruded between two heights
//! * **Footprint**: the exact set of `(x, z)` columns a shape covers
//! * **Factory**: the only way to build a region, normalizing raw corners and heights
//! * **Record**: the flat, persisted form of a region
//! * **Overlap**: finding which existing regions a candidate would collide with
//!
//! ## Cell Semantics
//!
//! Every measurement counts whole blocks. A cuboid from `(0, 0, 0)` to `(4, 9, 5)`
//! holds `5 * 10 * 6 = 300` blocks, not the continuous `4 * 9 * 5`. Containment,
//! overlap and volume all agree on which blocks belong to a region.
//!
//! ## Thread Safety
//!
//! A [`Region`] is immutable after construction. Resizing builds a new one. Every query
//! takes `&self` and performs no I/O, so regions can be shared freely between threads.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{BlockLocation, Vector2, Vector3};
use crate::world::WorldRef;

pub mod cuboid;
pub mod factory;
pub mod footprint;
pub mod overlap;
pub mod polygonal;
pub mod record;

pub use cuboid::Cuboid;
pub use factory::RegionFactory;
pub use footprint::{Footprint, GridRect};
pub use overlap::{first_overlapping, first_overlapping_by, overlapping};
pub use polygonal::Polygonal;
pub use record::{RecordBounds, RegionRecord};

/// Which variant a region is, as stored in the `shape` column of a record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shape {
    /// Axis-aligned box.
    Cuboid,
    /// Extruded polygon.
    Polygonal,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Cuboid => f.write_str("CUBOID"),
            Shape::Polygonal => f.write_str("POLYGONAL"),
        }
    }
}

/// A bank region: one of the two supported shapes.
///
/// Regions are created through [`RegionFactory`], which guarantees that
/// `min_y <= max_y`, that both lie within the world's height limit and that a polygon
/// has at least three vertices. Every query below is therefore total.
///
/// # Examples
///
/// ```
/// use bank_regions::core::Vector3;
/// use bank_regions::world::FixedHeight;
/// use bank_regions::RegionFactory;
///
/// let factory = RegionFactory::new(FixedHeight(255));
/// let region = factory
///     .cuboid_from("world", Vector3::new(0, 9, 5), Vector3::new(4, 0, 0))
///     .unwrap();
///
/// assert_eq!(region.get_volume(), 300);
/// assert_eq!(region.get_center_block(), Vector3::new(2, 4, 2));
/// assert!(region.contains(Vector3::new(4, 9, 5)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// An axis-aligned box between two inclusive corners.
    Cuboid(Cuboid),
    /// A polygon footprint extruded between two heights.
    Polygonal(Polygonal),
}

impl Region {
    /// The world this region lives in.
    pub fn world(&self) -> &WorldRef {
        match self {
            Region::Cuboid(c) => c.world(),
            Region::Polygonal(p) => p.world(),
        }
    }

    /// The variant discriminator, as written to a record's `shape` column.
    ///
    /// # Returns
    /// [`Shape::Cuboid`] or [`Shape::Polygonal`], matching the enum variant.
    pub fn shape(&self) -> Shape {
        match self {
            Region::Cuboid(_) => Shape::Cuboid,
            Region::Polygonal(_) => Shape::Polygonal,
        }
    }

    /// Whether this is a [`Region::Cuboid`].
    pub fn is_cuboid(&self) -> bool {
        matches!(self, Region::Cuboid(_))
    }

    /// Whether this is a [`Region::Polygonal`].
    pub fn is_polygonal(&self) -> bool {
        matches!(self, Region::Polygonal(_))
    }

    /// Lowest corner of the bounding box.
    ///
    /// For a polygon this is the corner of the box around its outline, which is
    /// usually not a vertex.
    pub fn get_minimum_block(&self) -> Vector3 {
        match self {
            Region::Cuboid(c) => c.min(),
            Region::Polygonal(p) => p.min(),
        }
    }

    /// Highest corner of the bounding box.
    pub fn get_maximum_block(&self) -> Vector3 {
        match self {
            Region::Cuboid(c) => c.max(),
            Region::Polygonal(p) => p.max(),
        }
    }

    /// Midpoint of the bounding box, truncated toward zero on each axis.
    pub fn get_center_block(&self) -> Vector3 {
        self.get_minimum_block().midpoint(self.get_maximum_block())
    }

    /// Lowest layer, inclusive.
    pub fn min_y(&self) -> i32 {
        self.get_minimum_block().y
    }

    /// Highest layer, inclusive.
    pub fn max_y(&self) -> i32 {
        self.get_maximum_block().y
    }

    /// Number of block layers between `min_y` and `max_y` inclusive.
    pub fn height(&self) -> i64 {
        i64::from(self.max_y()) - i64::from(self.min_y()) + 1
    }

    /// Number of blocks in the region.
    ///
    /// # Performance
    /// O(1) for cuboids. Polygons enumerate their bounding rectangle, so the cost
    /// grows with the footprint area.
    pub fn get_volume(&self) -> i64 {
        match self {
            Region::Cuboid(c) => c.volume(),
            Region::Polygonal(p) => p.volume(),
        }
    }

    /// Number of `(x, z)` columns covered.
    pub fn footprint_area(&self) -> i64 {
        match self {
            Region::Cuboid(c) => c.footprint_bounds().area(),
            Region::Polygonal(p) => p.footprint().len() as i64,
        }
    }

    /// Whether the block lies inside the region.
    ///
    /// A location that names a world only matches regions in that world; a bare
    /// [`Vector3`] is matched on coordinates alone.
    pub fn contains(&self, point: impl Into<BlockLocation>) -> bool {
        let BlockLocation { world, position } = point.into();
        if world.is_some_and(|world| &world != self.world()) {
            return false;
        }
        self.min_y() <= position.y
            && position.y <= self.max_y()
            && self.contains_2d(position.to_vector2())
    }

    /// Whether the column lies inside the footprint, ignoring height.
    pub fn contains_2d(&self, point: Vector2) -> bool {
        match self {
            Region::Cuboid(c) => c.contains_2d(point),
            Region::Polygonal(p) => p.contains_2d(point),
        }
    }

    /// Bounding rectangle of the footprint.
    pub fn footprint_bounds(&self) -> GridRect {
        match self {
            Region::Cuboid(c) => c.footprint_bounds(),
            Region::Polygonal(p) => p.footprint_bounds(),
        }
    }

    /// Exact set of columns covered.
    pub fn footprint(&self) -> Footprint {
        match self {
            Region::Cuboid(c) => c.footprint(),
            Region::Polygonal(p) => p.footprint(),
        }
    }

    /// The covered columns as a set, for callers that hash or intersect them.
    ///
    /// # Returns
    /// One entry per covered column.
    pub fn get_footprint_cells(&self) -> HashSet<Vector2> {
        self.footprint().cells().collect()
    }

    /// Shape corners lifted to both `min_y` and `max_y`.
    pub fn get_vertices(&self) -> BTreeSet<Vector3> {
        match self {
            Region::Cuboid(c) => c.vertices(),
            Region::Polygonal(p) => p.vertices(),
        }
    }

    /// Polygon outline in its stored order, or `None` for a cuboid.
    pub fn polygon_vertices(&self) -> Option<&[Vector2]> {
        match self {
            Region::Cuboid(_) => None,
            Region::Polygonal(p) => Some(p.vertices_2d()),
        }
    }

    /// Whether both regions contain at least one common block.
    ///
    /// Regions in different worlds never overlap. Sharing a single boundary column is
    /// an overlap, because boundaries belong to the region.
    ///
    /// # Performance
    /// Disjoint height ranges and disjoint bounding rectangles are rejected without
    /// touching any column. Otherwise only the columns shared by both bounding
    /// rectangles are tested.
    pub fn overlaps(&self, other: &Region) -> bool {
        if self.world() != other.world() {
            return false;
        }
        if self.max_y() < other.min_y() || self.min_y() > other.max_y() {
            return false;
        }
        let Some(shared) = self.footprint_bounds().intersection(&other.footprint_bounds()) else {
            trace!("bounding rectangles of {} and {} are disjoint", self, other);
            return false;
        };

        match (self, other) {
            (Region::Cuboid(_), Region::Cuboid(_)) => true,
            (Region::Cuboid(_), Region::Polygonal(p)) | (Region::Polygonal(p), Region::Cuboid(_)) => {
                shared.cells().any(|cell| p.contains_2d(cell))
            }
            (Region::Polygonal(a), Region::Polygonal(b)) => shared
                .cells()
                .any(|cell| a.contains_2d(cell) && b.contains_2d(cell)),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Cuboid(c) => write!(f, "cuboid {} {} -> {}", c.world(), c.min(), c.max()),
            Region::Polygonal(p) => write!(
                f,
                "polygon {} [{} vertices] y {}..{}",
                p.world(),
                p.vertices_2d().len(),
                p.min_y(),
                p.max_y()
            ),
        }
    }
}

impl From<Cuboid> for Region {
    fn from(cuboid: Cuboid) -> Self {
        Region::Cuboid(cuboid)
    }
}

impl From<Polygonal> for Region {
    fn from(polygonal: Polygonal) -> Self {
        Region::Polygonal(polygonal)
    }
}
