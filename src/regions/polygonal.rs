//! # Polygonal Regions
//!
//! A polygonal region is a vertical prism: a polygon footprint extruded between two
//! heights. Vertices are kept exactly as supplied. Concave outlines, repeated vertices
//! and edges that touch each other are all legal, and containment depends on the order
//! the edges are walked in.
//!
//! ## Containment
//!
//! Containment is a boundary-inclusive ray cast on integer columns. Each column is
//! treated as a unit cell rather than a point, so areas come out as "pixel" counts:
//! the square `(0,0)..(10,10)` covers 121 columns and a diamond of radius 4 covers 41.

use std::collections::BTreeSet;

use crate::core::{Vector2, Vector3};
use crate::error::{RegionError, Result};
use crate::world::WorldRef;

use super::footprint::{Footprint, GridRect};

/// Minimum number of vertices a polygonal region needs.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// A polygon footprint between `min_y` and `max_y` inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polygonal {
    world: WorldRef,
    vertices: Vec<Vector2>,
    /// Bounding rectangle of `vertices`.
    bounds: GridRect,
    min_y: i32,
    max_y: i32,
}

impl Polygonal {
    /// Assumes `min_y <= max_y`.
    ///
    /// # Errors
    /// [`RegionError::TooFewVertices`] when fewer than [`MIN_POLYGON_VERTICES`] are given.
    pub(crate) fn new(world: WorldRef, vertices: Vec<Vector2>, min_y: i32, max_y: i32) -> Result<Self> {
        debug_assert!(min_y <= max_y);
        let too_few = RegionError::TooFewVertices { got: vertices.len() };
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(too_few);
        }
        let bounds = GridRect::bounding(vertices.iter().copied()).ok_or(too_few)?;
        Ok(Polygonal {
            world,
            vertices,
            bounds,
            min_y,
            max_y,
        })
    }

    /// The world this prism lives in.
    pub fn world(&self) -> &WorldRef {
        &self.world
    }

    /// Vertices in their original order.
    pub fn vertices_2d(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Bounding rectangle of the vertices.
    pub fn footprint_bounds(&self) -> GridRect {
        self.bounds
    }

    /// Lowest layer, inclusive.
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    /// Highest layer, inclusive.
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Corner of the bounding box at `min_y`.
    pub fn min(&self) -> Vector3 {
        self.bounds.min.with_y(self.min_y)
    }

    /// Corner of the bounding box at `max_y`.
    pub fn max(&self) -> Vector3 {
        self.bounds.max.with_y(self.max_y)
    }

    /// Footprint columns times the number of layers.
    pub fn volume(&self) -> i64 {
        let layers = i64::from(self.max_y) - i64::from(self.min_y) + 1;
        layers.saturating_mul(self.footprint().len() as i64)
    }

    /// Every vertex lifted to both `min_y` and `max_y`.
    pub fn vertices(&self) -> BTreeSet<Vector3> {
        self.vertices
            .iter()
            .flat_map(|v| [v.with_y(self.min_y), v.with_y(self.max_y)])
            .collect()
    }

    /// Boundary-inclusive ray cast against the polygon outline.
    pub fn contains_2d(&self, point: Vector2) -> bool {
        if !self.bounds.contains(point) {
            return false;
        }
        contains_point(&self.vertices, point)
    }

    /// Runs [`contains_point`] over every column of the bounding rectangle.
    ///
    /// # Returns
    /// The exact set of columns inside the outline. Cost grows with the bounding
    /// rectangle's area, not with the vertex count.
    pub fn footprint(&self) -> Footprint {
        Footprint::from_predicate(self.bounds, |cell| contains_point(&self.vertices, cell))
    }
}

/// Point-in-polygon test over integer columns.
///
/// Walks every edge, closing the loop from the last vertex back to the first. An edge
/// is only considered when its x range includes the query column. A zero cross product
/// means the column lies on the edge's line, and it is inside when it also lies within
/// the edge's z range. A negative cross product flips the inside flag unless the ray
/// passes exactly through the edge's left endpoint, which keeps a vertex shared by two
/// edges from being counted twice.
pub fn contains_point(vertices: &[Vector2], point: Vector2) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    if vertices.contains(&point) {
        return true;
    }

    let px = i128::from(point.x);
    let pz = i128::from(point.z);
    let mut inside = false;
    let mut prev = vertices[vertices.len() - 1];

    for &next in vertices {
        let (left, right) = if next.x > prev.x { (prev, next) } else { (next, prev) };
        prev = next;

        let (x1, z1) = (i128::from(left.x), i128::from(left.z));
        let (x2, z2) = (i128::from(right.x), i128::from(right.z));
        if px < x1 || px > x2 {
            continue;
        }

        let cross = (pz - z1) * (x2 - x1) - (z2 - z1) * (px - x1);
        if cross == 0 {
            if (z1 <= pz) == (pz <= z2) {
                return true;
            }
        } else if cross < 0 && px != x1 {
            inside = !inside;
        }
    }

    inside
}
