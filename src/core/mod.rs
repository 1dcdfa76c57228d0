//! # Core Module
//!
//! Integer grid coordinates used by every other part of the crate.
//!
//! ## Key Components
//! - `Vector2`: an `(x, z)` column on the world grid, ignoring height
//! - `Vector3`: a full `(x, y, z)` block coordinate
//! - `BlockLocation`: a `Vector3` that may also name the world it belongs to
//!
//! All three are plain value types: they are `Copy` (except `BlockLocation`, which
//! owns its world name), compare component-wise and order lexicographically.
//!
//! ## Usage
//! ```rust
//! use bank_regions::core::{Vector2, Vector3};
//!
//! let block = Vector3::new(4, 64, -2);
//! assert_eq!(block.to_vector2(), Vector2::new(4, -2));
//! assert_eq!(Vector2::new(4, -2).with_y(64), block);
//! ```

pub mod vector2;
pub mod vector3;

pub use vector2::Vector2;
pub use vector3::{BlockLocation, Vector3};
