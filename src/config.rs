//! # Configuration Module
//!
//! Height limits for hosts that do not expose a live world-height query. The table is
//! read from JSON:
//!
//! ```json
//! {
//!     "default_max_height": 255,
//!     "worlds": { "world_nether": 127 }
//! }
//! ```

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;

use crate::error::Result;
use crate::world::{WorldHeightProvider, WorldRef};

/// Per-world height limits with an optional fallback.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Limit used for worlds missing from `worlds`. Without it those worlds are unknown.
    pub default_max_height: Option<i32>,
    /// Explicit limit per world name.
    pub worlds: HashMap<String, i32>,
}

impl RegionConfig {
    /// Parses a height table from a JSON string.
    ///
    /// Missing fields default to empty, so `{}` is a valid config that knows no worlds.
    ///
    /// # Errors
    /// [`RegionError::Config`](crate::RegionError::Config) when the JSON is malformed
    /// or has the wrong shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Same as [`from_json_str`](Self::from_json_str), reading from any [`Read`] source.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl WorldHeightProvider for RegionConfig {
    fn max_height(&self, world: &WorldRef) -> Option<i32> {
        self.worlds
            .get(world.name())
            .copied()
            .or(self.default_max_height)
    }
}
