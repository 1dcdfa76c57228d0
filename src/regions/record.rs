//! # Region Records
//!
//! The flat form a region takes in a row or key-value store. Columns shared by both
//! shapes sit at the top level; the `shape` column selects which extra columns follow:
//!
//! ```json
//! { "world_name": "world", "min_y": 0, "max_y": 9, "shape": "CUBOID",
//!   "min_x": 0, "max_x": 4, "min_z": 0, "max_z": 5 }
//!
//! { "world_name": "world", "min_y": 1, "max_y": 1, "shape": "POLYGONAL",
//!   "vertex_xs": [0, 0, 10, 10], "vertex_zs": [0, 10, 10, 0] }
//! ```
//!
//! Records are produced by [`Region::to_record`] and turned back into regions by
//! [`RegionFactory::from_persisted`](super::RegionFactory::from_persisted).

use serde::{Deserialize, Serialize};

use super::{Region, Shape};

/// A region as stored by the persistence layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Name of the world the region lives in.
    pub world_name: String,
    /// Lowest layer, inclusive.
    pub min_y: i32,
    /// Highest layer, inclusive.
    pub max_y: i32,
    /// Columns that depend on the shape.
    #[serde(flatten)]
    pub bounds: RecordBounds,
}

/// Shape-specific columns, tagged by `shape`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordBounds {
    /// Inclusive x and z ranges of a box.
    Cuboid {
        /// Lowest x.
        min_x: i32,
        /// Highest x.
        max_x: i32,
        /// Lowest z.
        min_z: i32,
        /// Highest z.
        max_z: i32,
    },
    /// Parallel arrays; `vertex_xs[i]` and `vertex_zs[i]` form vertex `i`.
    Polygonal {
        /// x coordinate of each vertex.
        vertex_xs: Vec<i32>,
        /// z coordinate of each vertex.
        vertex_zs: Vec<i32>,
    },
}

impl RegionRecord {
    /// Which variant the record restores to.
    pub fn shape(&self) -> Shape {
        match self.bounds {
            RecordBounds::Cuboid { .. } => Shape::Cuboid,
            RecordBounds::Polygonal { .. } => Shape::Polygonal,
        }
    }
}

impl Region {
    /// Flattens this region into its persisted columns.
    pub fn to_record(&self) -> RegionRecord {
        let min = self.get_minimum_block();
        let max = self.get_maximum_block();
        let bounds = match self {
            Region::Cuboid(_) => RecordBounds::Cuboid {
                min_x: min.x,
                max_x: max.x,
                min_z: min.z,
                max_z: max.z,
            },
            Region::Polygonal(p) => {
                let (vertex_xs, vertex_zs) = p.vertices_2d().iter().map(|v| (v.x, v.z)).unzip();
                RecordBounds::Polygonal {
                    vertex_xs,
                    vertex_zs,
                }
            }
        };
        RegionRecord {
            world_name: self.world().name().to_owned(),
            min_y: min.y,
            max_y: max.y,
            bounds,
        }
    }
}
