//! # Footprint Module
//!
//! A region's footprint is the set of `(x, z)` columns it covers, ignoring height.
//! Volumes, overlap checks and chest-adjacency style lookups are all defined in terms
//! of these cells, so they are counted exactly instead of measured continuously.
//!
//! ## Storage
//!
//! A [`Footprint`] keeps its inclusive bounding rectangle and one bit per column of that
//! rectangle, in row-major order (x fastest, then z):
//!
//! ```text
//! index = (z - min.z) * width + (x - min.x)
//! ```
//!
//! A set bit means the column is inside the shape. A cuboid sets every bit; a polygon
//! sets exactly the columns its ray-casting test accepts.

use bitvec::prelude::BitVec;

use crate::core::Vector2;

/// An inclusive, axis-aligned rectangle of grid columns.
///
/// `min` is always component-wise less than or equal to `max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridRect {
    /// Lowest `x` and `z` in the rectangle.
    pub min: Vector2,
    /// Highest `x` and `z` in the rectangle.
    pub max: Vector2,
}

impl GridRect {
    /// Builds the rectangle spanned by two arbitrary opposite corners.
    pub fn new(a: Vector2, b: Vector2) -> Self {
        GridRect {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest rectangle containing every point, or `None` for an empty input.
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(GridRect::new(first, first), |rect, point| GridRect {
            min: rect.min.min(point),
            max: rect.max.max(point),
        }))
    }

    /// Number of columns along the x axis.
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x) + 1
    }

    /// Number of columns along the z axis.
    pub fn depth(&self) -> i64 {
        i64::from(self.max.z) - i64::from(self.min.z) + 1
    }

    /// Number of columns in the rectangle, saturating at `i64::MAX`.
    pub fn area(&self) -> i64 {
        self.width().saturating_mul(self.depth())
    }

    /// Whether `point` lies inside the rectangle or on its edge.
    pub fn contains(&self, point: Vector2) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.z <= point.z
            && point.z <= self.max.z
    }

    /// The columns shared by both rectangles, if any.
    pub fn intersection(&self, other: &GridRect) -> Option<GridRect> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min.x <= max.x && min.z <= max.z).then_some(GridRect { min, max })
    }

    /// Every column of the rectangle in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Vector2> {
        let GridRect { min, max } = *self;
        (min.z..=max.z).flat_map(move |z| (min.x..=max.x).map(move |x| Vector2::new(x, z)))
    }
}

/// The exact set of columns covered by a region.
///
/// # Examples
/// ```
/// use bank_regions::core::Vector2;
/// use bank_regions::regions::footprint::{Footprint, GridRect};
///
/// let rect = GridRect::new(Vector2::new(0, 0), Vector2::new(2, 2));
/// let cross = Footprint::from_predicate(rect, |cell| cell.x == 1 || cell.z == 1);
/// assert_eq!(cross.len(), 5);
/// assert!(cross.contains(Vector2::new(1, 0)));
/// assert!(!cross.contains(Vector2::new(0, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Footprint {
    bounds: GridRect,
    /// One bit per column of `bounds`, row-major.
    cells: BitVec,
    /// Cached number of set bits.
    len: usize,
}

impl Footprint {
    /// A footprint covering every column of `bounds`.
    pub fn filled(bounds: GridRect) -> Self {
        let size = bounds.area() as usize;
        Footprint {
            bounds,
            cells: BitVec::repeat(true, size),
            len: size,
        }
    }

    /// Tests every column of `bounds` against `inside` and records the result.
    ///
    /// This is the reference definition of a footprint: a column belongs to it exactly
    /// when the shape's planar test accepts it.
    pub fn from_predicate<F>(bounds: GridRect, inside: F) -> Self
    where
        F: Fn(Vector2) -> bool,
    {
        let mut cells = BitVec::with_capacity(bounds.area() as usize);
        let mut len = 0;
        for cell in bounds.cells() {
            let hit = inside(cell);
            len += usize::from(hit);
            cells.push(hit);
        }
        Footprint { bounds, cells, len }
    }

    /// The rectangle this footprint's bits are laid out over.
    pub fn bounds(&self) -> GridRect {
        self.bounds
    }

    /// Number of columns covered.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no column is covered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `point` is one of the covered columns.
    pub fn contains(&self, point: Vector2) -> bool {
        self.index_of(point).is_some_and(|index| self.cells[index])
    }

    /// Every covered column in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.cells.iter_ones().map(move |index| self.cell_at(index))
    }

    /// Whether both footprints cover at least one common column.
    ///
    /// Only the intersection of the two bounding rectangles is scanned.
    pub fn intersects(&self, other: &Footprint) -> bool {
        match self.bounds.intersection(&other.bounds) {
            Some(shared) => shared
                .cells()
                .any(|cell| self.contains(cell) && other.contains(cell)),
            None => false,
        }
    }

    fn index_of(&self, point: Vector2) -> Option<usize> {
        if !self.bounds.contains(point) {
            return None;
        }
        let dx = i64::from(point.x) - i64::from(self.bounds.min.x);
        let dz = i64::from(point.z) - i64::from(self.bounds.min.z);
        Some((dz * self.bounds.width() + dx) as usize)
    }

    fn cell_at(&self, index: usize) -> Vector2 {
        let width = self.bounds.width();
        let index = index as i64;
        Vector2::new(
            (i64::from(self.bounds.min.x) + index % width) as i32,
            (i64::from(self.bounds.min.z) + index / width) as i32,
        )
    }
}
