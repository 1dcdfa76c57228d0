//! # Region Factory
//!
//! Turns raw selection data or persisted records into valid [`Region`]s.
//!
//! ## Normalization
//!
//! * Corners may be given in any order; each axis is sorted into min/max.
//! * Heights are swapped if reversed and clamped to `[0, max_height(world)]`.
//!   Clamping is silent: out-of-range heights are corrected, not rejected.
//! * Polygon vertices are kept verbatim. No deduplication, no hull.
//!
//! Persisted records are trusted, so their geometry is not re-validated, but their
//! heights are clamped again in case the world's height limit changed since they
//! were written.

use log::{debug, warn};

use crate::core::{Vector2, Vector3};
use crate::error::{RegionError, Result};
use crate::world::{WorldHeightProvider, WorldRef};

use super::record::{RecordBounds, RegionRecord};
use super::{Cuboid, Polygonal, Region};

/// Builds regions, consulting `H` for each world's height limit.
///
/// # Examples
///
/// ```
/// use bank_regions::core::Vector2;
/// use bank_regions::world::FixedHeight;
/// use bank_regions::{RegionError, RegionFactory};
///
/// let factory = RegionFactory::new(FixedHeight(255));
///
/// let square = factory
///     .polygon_from("world", [(0, 0), (0, 10), (10, 10), (10, 0)].map(Vector2::from), 1, 1)
///     .unwrap();
/// assert_eq!(square.get_volume(), 121);
///
/// let line = factory.polygon_from("world", [Vector2::new(0, 0), Vector2::new(5, 0)], 0, 5);
/// assert!(matches!(line, Err(RegionError::TooFewVertices { got: 2 })));
/// ```
#[derive(Clone, Debug)]
pub struct RegionFactory<H> {
    heights: H,
}

impl<H: WorldHeightProvider> RegionFactory<H> {
    /// Creates a factory backed by a height provider.
    ///
    /// # Arguments
    /// * `heights` - Source of each world's maximum build height
    ///
    /// # Returns
    /// A factory that clamps every region it builds into `[0, max_height]`.
    pub fn new(heights: H) -> Self {
        RegionFactory { heights }
    }

    /// The height provider this factory consults.
    pub fn heights(&self) -> &H {
        &self.heights
    }

    /// Builds the cuboid spanned by two opposite corners given in any order.
    ///
    /// A single-block cuboid (both corners equal) is accepted; callers that require a
    /// larger region check [`Region::get_volume`] themselves.
    ///
    /// # Errors
    /// [`RegionError::UnknownWorld`] if the world has no known height limit.
    pub fn cuboid_from(&self, world: impl Into<WorldRef>, a: Vector3, b: Vector3) -> Result<Region> {
        let world = world.into();
        let (min_y, max_y) = self.clamp_y(&world, a.y, b.y)?;
        let min = a.min(b);
        let max = a.max(b);
        Ok(Cuboid::new(
            world,
            Vector3::new(min.x, min_y, min.z),
            Vector3::new(max.x, max_y, max.z),
        )
        .into())
    }

    /// Builds a polygonal prism over `vertices`, kept in the order given.
    ///
    /// # Errors
    /// [`RegionError::TooFewVertices`] for fewer than three vertices,
    /// [`RegionError::UnknownWorld`] if the world has no known height limit.
    pub fn polygon_from<I>(&self, world: impl Into<WorldRef>, vertices: I, min_y: i32, max_y: i32) -> Result<Region>
    where
        I: IntoIterator<Item = Vector2>,
    {
        let world = world.into();
        let vertices: Vec<Vector2> = vertices.into_iter().collect();
        let (min_y, max_y) = self.clamp_y(&world, min_y, max_y)?;
        Ok(Polygonal::new(world, vertices, min_y, max_y)?.into())
    }

    /// Restores a region from its persisted record.
    pub fn from_persisted(&self, record: &RegionRecord) -> Result<Region> {
        match &record.bounds {
            RecordBounds::Cuboid {
                min_x,
                max_x,
                min_z,
                max_z,
            } => self.cuboid_from_persisted(
                record.world_name.as_str(),
                [*min_x, *max_x, record.min_y, record.max_y, *min_z, *max_z],
            ),
            RecordBounds::Polygonal { vertex_xs, vertex_zs } => self.polygon_from_persisted(
                record.world_name.as_str(),
                vertex_xs,
                vertex_zs,
                record.min_y,
                record.max_y,
            ),
        }
    }

    /// Restores a cuboid from `[min_x, max_x, min_y, max_y, min_z, max_z]`.
    pub fn cuboid_from_persisted(&self, world: impl Into<WorldRef>, bounds: [i32; 6]) -> Result<Region> {
        let world = world.into();
        let [min_x, max_x, min_y, max_y, min_z, max_z] = bounds;
        if min_x > max_x || min_z > max_z {
            warn!("stored cuboid in {world} has reversed bounds {bounds:?}, reordering");
        }
        self.cuboid_from(
            world,
            Vector3::new(min_x, min_y, min_z),
            Vector3::new(max_x, max_y, max_z),
        )
    }

    /// Restores a polygon from parallel coordinate arrays.
    ///
    /// # Errors
    /// [`RegionError::VertexArrayMismatch`] when the arrays differ in length, plus
    /// everything [`polygon_from`](Self::polygon_from) reports.
    pub fn polygon_from_persisted(
        &self,
        world: impl Into<WorldRef>,
        xs: &[i32],
        zs: &[i32],
        min_y: i32,
        max_y: i32,
    ) -> Result<Region> {
        if xs.len() != zs.len() {
            return Err(RegionError::VertexArrayMismatch {
                xs: xs.len(),
                zs: zs.len(),
            });
        }
        let vertices = xs.iter().zip(zs).map(|(&x, &z)| Vector2::new(x, z));
        self.polygon_from(world, vertices, min_y, max_y)
    }

    /// Orders `a` and `b` and clamps both into `[0, max_height(world)]`.
    fn clamp_y(&self, world: &WorldRef, a: i32, b: i32) -> Result<(i32, i32)> {
        let limit = self
            .heights
            .max_height(world)
            .ok_or_else(|| RegionError::UnknownWorld(world.clone()))?
            .max(0);

        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let clamped = (lo.clamp(0, limit), hi.clamp(0, limit));
        if clamped != (lo, hi) {
            debug!("clamped y range {lo}..{hi} to {}..{} in {world}", clamped.0, clamped.1);
        }
        Ok(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::FixedHeight;

    fn factory() -> RegionFactory<FixedHeight> {
        RegionFactory::new(FixedHeight(255))
    }

    #[test]
    fn corner_order_does_not_matter() {
        let a = Vector3::new(0, 9, 5);
        let b = Vector3::new(4, 0, 0);
        let ab = factory().cuboid_from("world", a, b).unwrap();
        let ba = factory().cuboid_from("world", b, a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.get_minimum_block(), Vector3::new(0, 0, 0));
        assert_eq!(ab.get_maximum_block(), Vector3::new(4, 9, 5));
        assert_eq!(ab.get_volume(), 300);
    }

    #[test]
    fn heights_are_clamped_into_world() {
        let region = factory()
            .cuboid_from("world", Vector3::new(0, -20, 0), Vector3::new(1, 400, 1))
            .unwrap();
        assert_eq!((region.min_y(), region.max_y()), (0, 255));

        let polygon = factory()
            .polygon_from("world", [(0, 0), (3, 0), (0, 3)].map(Vector2::from), 300, -5)
            .unwrap();
        assert_eq!((polygon.min_y(), polygon.max_y()), (0, 255));
    }

    #[test]
    fn reversed_polygon_heights_are_swapped() {
        let polygon = factory()
            .polygon_from("world", [(0, 0), (3, 0), (0, 3)].map(Vector2::from), 40, 10)
            .unwrap();
        assert_eq!((polygon.min_y(), polygon.max_y()), (10, 40));
    }

    #[test]
    fn single_block_cuboid_is_allowed() {
        let p = Vector3::new(7, 7, 7);
        let region = factory().cuboid_from("world", p, p).unwrap();
        assert_eq!(region.get_volume(), 1);
    }

    #[test]
    fn polygon_needs_three_vertices() {
        let err = factory()
            .polygon_from("world", [Vector2::new(0, 0), Vector2::new(1, 1)], 0, 10)
            .unwrap_err();
        assert!(matches!(err, RegionError::TooFewVertices { got: 2 }));

        let err = factory()
            .polygon_from("world", std::iter::empty(), 0, 10)
            .unwrap_err();
        assert!(matches!(err, RegionError::TooFewVertices { got: 0 }));
    }

    #[test]
    fn polygon_keeps_vertex_order_and_duplicates() {
        let points = [(0, 0), (5, 0), (5, 0), (0, 5)].map(Vector2::from);
        let region = factory().polygon_from("world", points, 0, 1).unwrap();
        assert_eq!(region.polygon_vertices(), Some(&points[..]));
    }

    #[test]
    fn unknown_world_is_rejected() {
        let factory = RegionFactory::new(|world: &WorldRef| (world.name() == "world").then_some(255));
        let err = factory
            .cuboid_from("elsewhere", Vector3::ZERO, Vector3::new(1, 1, 1))
            .unwrap_err();
        assert!(matches!(err, RegionError::UnknownWorld(ref w) if w.name() == "elsewhere"));
    }

    #[test]
    fn persisted_polygon_arrays_must_match() {
        let err = factory()
            .polygon_from_persisted("world", &[0, 1, 2], &[0, 1], 0, 5)
            .unwrap_err();
        assert!(matches!(err, RegionError::VertexArrayMismatch { xs: 3, zs: 2 }));
    }

    #[test]
    fn persisted_polygon_with_short_arrays_is_rejected() {
        let err = factory()
            .polygon_from_persisted("world", &[0, 1], &[0, 1], 0, 5)
            .unwrap_err();
        assert!(matches!(err, RegionError::TooFewVertices { got: 2 }));

        let err = factory()
            .polygon_from_persisted("world", &[], &[], 0, 5)
            .unwrap_err();
        assert!(matches!(err, RegionError::TooFewVertices { got: 0 }));
    }

    #[test]
    fn persisted_heights_follow_a_lowered_limit() {
        let record = factory()
            .cuboid_from("world", Vector3::new(0, 10, 0), Vector3::new(3, 250, 3))
            .unwrap()
            .to_record();
        let lowered = RegionFactory::new(FixedHeight(127));
        let region = lowered.from_persisted(&record).unwrap();
        assert_eq!((region.min_y(), region.max_y()), (10, 127));
    }

    #[test]
    fn persisted_cuboid_with_reversed_bounds_is_reordered() {
        let region = factory()
            .cuboid_from_persisted("world", [5, 1, 0, 9, 5, 1])
            .unwrap();
        assert_eq!(region.get_minimum_block(), Vector3::new(1, 0, 1));
        assert_eq!(region.get_maximum_block(), Vector3::new(5, 9, 5));
    }
}
