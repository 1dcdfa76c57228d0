//! Full block coordinates, optionally tied to a world.

use std::fmt;

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use super::Vector2;
use crate::world::WorldRef;

/// A single block coordinate on the world grid.
///
/// # Examples
/// ```
/// use bank_regions::core::Vector3;
///
/// let lo = Vector3::new(0, 9, 5);
/// let hi = Vector3::new(4, 0, 0);
/// assert_eq!(lo.min(hi), Vector3::new(0, 0, 0));
/// assert_eq!(lo.max(hi), Vector3::new(4, 9, 5));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vector3 {
    /// East-west block coordinate.
    pub x: i32,
    /// Height.
    pub y: i32,
    /// North-south block coordinate.
    pub z: i32,
}

impl Vector3 {
    /// The origin block.
    pub const ZERO: Vector3 = Vector3 { x: 0, y: 0, z: 0 };

    /// Creates a block coordinate.
    ///
    /// # Arguments
    /// * `x` - East-west coordinate
    /// * `y` - Height
    /// * `z` - North-south coordinate
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Vector3 { x, y, z }
    }

    /// Drops the height component.
    pub const fn to_vector2(self) -> Vector2 {
        Vector2::new(self.x, self.z)
    }

    /// Component-wise minimum of two blocks.
    pub fn min(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum of two blocks.
    pub fn max(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Integer midpoint of two blocks, truncating each axis toward zero.
    pub fn midpoint(self, other: Vector3) -> Vector3 {
        let mid = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
        Vector3::new(mid(self.x, other.x), mid(self.y, other.y), mid(self.z, other.z))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Vector3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Point3<i32>> for Vector3 {
    fn from(point: Point3<i32>) -> Self {
        Vector3::new(point.x, point.y, point.z)
    }
}

impl From<Vector3> for Point3<i32> {
    fn from(vector: Vector3) -> Self {
        Point3::new(vector.x, vector.y, vector.z)
    }
}

/// A block coordinate that may carry the world it was observed in.
///
/// Host code usually knows which world a player or chest is in; passing it along
/// lets [`Region::contains`](crate::Region::contains) reject points from other worlds.
/// A location without a world is matched on coordinates alone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockLocation {
    /// World the block was observed in, if known.
    pub world: Option<WorldRef>,
    /// Block coordinate within that world.
    pub position: Vector3,
}

impl BlockLocation {
    /// A location pinned to `world`.
    pub fn new(world: WorldRef, position: Vector3) -> Self {
        BlockLocation {
            world: Some(world),
            position,
        }
    }
}

impl From<Vector3> for BlockLocation {
    fn from(position: Vector3) -> Self {
        BlockLocation {
            world: None,
            position,
        }
    }
}

impl From<&Vector3> for BlockLocation {
    fn from(position: &Vector3) -> Self {
        BlockLocation::from(*position)
    }
}

impl From<Point3<i32>> for BlockLocation {
    fn from(point: Point3<i32>) -> Self {
        BlockLocation::from(Vector3::from(point))
    }
}
