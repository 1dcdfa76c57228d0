//! Error types for region construction.
//!
//! Only the construction path can fail. Once a [`Region`](crate::Region) exists every
//! query on it is total.

use thiserror::Error;

use crate::world::WorldRef;

/// Result type alias for region construction.
pub type Result<T> = std::result::Result<T, RegionError>;

/// Reasons supplied corner or vertex data cannot form a legal region.
#[derive(Debug, Error)]
pub enum RegionError {
    /// A polygon needs at least three vertices.
    #[error("a polygonal region needs at least 3 vertices, got {got}")]
    TooFewVertices {
        /// Number of vertices supplied.
        got: usize,
    },

    /// The height provider has no limit for this world.
    #[error("no height limit is known for world `{0}`")]
    UnknownWorld(WorldRef),

    /// Persisted vertex coordinate arrays differ in length.
    #[error("vertex arrays differ in length: {xs} x values, {zs} z values")]
    VertexArrayMismatch {
        /// Length of the x array.
        xs: usize,
        /// Length of the z array.
        zs: usize,
    },

    /// Configuration could not be parsed.
    #[error("invalid region configuration: {0}")]
    Config(#[from] serde_json::Error),
}
