//! Height-less grid columns.

use std::fmt;

use cgmath::Point2;
use serde::{Deserialize, Serialize};

use super::Vector3;

/// A column on the world grid, identified by its `x` and `z` block coordinates.
///
/// Regions use `Vector2` for everything that ignores height: polygon vertices,
/// footprint cells and the planar containment test.
///
/// # Examples
/// ```
/// use bank_regions::core::Vector2;
///
/// let a = Vector2::new(1, 5);
/// let b = Vector2::new(2, -3);
/// assert!(a < b);
/// assert_eq!(a.to_string(), "(1, 5)");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vector2 {
    /// East-west block coordinate.
    pub x: i32,
    /// North-south block coordinate.
    pub z: i32,
}

impl Vector2 {
    /// The origin column.
    pub const ZERO: Vector2 = Vector2 { x: 0, z: 0 };

    /// Creates a column from its block coordinates.
    ///
    /// # Arguments
    /// * `x` - East-west coordinate
    /// * `z` - North-south coordinate
    pub const fn new(x: i32, z: i32) -> Self {
        Vector2 { x, z }
    }

    /// Lifts this column to a block at height `y`.
    pub const fn with_y(self, y: i32) -> Vector3 {
        Vector3::new(self.x, y, self.z)
    }

    /// Component-wise minimum of two columns.
    pub fn min(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x.min(other.x), self.z.min(other.z))
    }

    /// Component-wise maximum of two columns.
    pub fn max(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x.max(other.x), self.z.max(other.z))
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for Vector2 {
    fn from((x, z): (i32, i32)) -> Self {
        Vector2::new(x, z)
    }
}

impl From<Point2<i32>> for Vector2 {
    fn from(point: Point2<i32>) -> Self {
        Vector2::new(point.x, point.y)
    }
}

impl From<Vector2> for Point2<i32> {
    fn from(vector: Vector2) -> Self {
        Point2::new(vector.x, vector.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_x_then_z() {
        let mut columns = vec![Vector2::new(1, 2), Vector2::new(0, 9), Vector2::new(1, -4)];
        columns.sort();
        assert_eq!(
            columns,
            vec![Vector2::new(0, 9), Vector2::new(1, -4), Vector2::new(1, 2)]
        );
    }

    #[test]
    fn min_max_are_component_wise() {
        let a = Vector2::new(3, -1);
        let b = Vector2::new(-2, 7);
        assert_eq!(a.min(b), Vector2::new(-2, -1));
        assert_eq!(a.max(b), Vector2::new(3, 7));
    }

    #[test]
    fn cgmath_point_maps_y_onto_z() {
        let column: Vector2 = Point2::new(5, -8).into();
        assert_eq!(column, Vector2::new(5, -8));
        assert_eq!(Point2::from(column), Point2::new(5, -8));
    }
}
