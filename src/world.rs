//! # World Module
//!
//! The engine never looks inside a world. It only carries a [`WorldRef`] so regions can
//! be persisted and compared, and asks a [`WorldHeightProvider`] for the build height
//! limit when it clamps the vertical bounds of a new region.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque name of a world owned by the host server.
///
/// Serialized as a plain string, matching the `world_name` column of a record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldRef(String);

impl WorldRef {
    /// Creates a reference to the world with the given name.
    ///
    /// # Arguments
    /// * `name` - The world name as the host server knows it
    pub fn new(name: impl Into<String>) -> Self {
        WorldRef(name.into())
    }

    /// The world name this reference was created with.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorldRef {
    fn from(name: &str) -> Self {
        WorldRef::new(name)
    }
}

impl From<String> for WorldRef {
    fn from(name: String) -> Self {
        WorldRef(name)
    }
}

/// Supplies the maximum build height of a world.
///
/// Returning `None` means the host does not know the world, which region
/// construction reports as [`RegionError::UnknownWorld`](crate::RegionError::UnknownWorld).
pub trait WorldHeightProvider {
    /// Highest buildable y coordinate of `world`, or `None` if the world is unknown.
    fn max_height(&self, world: &WorldRef) -> Option<i32>;
}

/// Every world shares the same height limit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedHeight(pub i32);

impl WorldHeightProvider for FixedHeight {
    fn max_height(&self, _world: &WorldRef) -> Option<i32> {
        Some(self.0)
    }
}

impl<F> WorldHeightProvider for F
where
    F: Fn(&WorldRef) -> Option<i32>,
{
    fn max_height(&self, world: &WorldRef) -> Option<i32> {
        self(world)
    }
}
