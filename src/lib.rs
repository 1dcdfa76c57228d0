#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Bank Regions
//!
//! Geometry for bank regions: named, non-overlapping 3-D areas on a block world.
//!
//! This crate answers the questions the rest of a server plugin asks about those areas:
//! is a block inside a region, would two regions share a block, how many blocks does a
//! region hold, and how is a region written to and read back from storage. Commands,
//! permissions, economy and storage itself live elsewhere and call into this crate.
//!
//! ## Key Modules
//!
//! * `core` - integer grid coordinates (`Vector2`, `Vector3`)
//! * `world` - world references and the height-limit capability
//! * `regions` - the `Region` type, its factory, persisted records and overlap queries
//! * `config` - height limits loaded from JSON for hosts without a live query
//! * `error` - construction errors
//!
//! ## Usage
//!
//! ```rust
//! use bank_regions::core::{Vector2, Vector3};
//! use bank_regions::world::FixedHeight;
//! use bank_regions::{first_overlapping, RegionFactory};
//!
//! let factory = RegionFactory::new(FixedHeight(255));
//!
//! let vault = factory
//!     .cuboid_from("world", Vector3::new(1, 0, 1), Vector3::new(5, 9, 5))
//!     .unwrap();
//! let plaza = factory
//!     .polygon_from("world", [(0, 2), (5, 2), (5, -6)].map(Vector2::from), 0, 9)
//!     .unwrap();
//!
//! assert!(vault.contains(Vector3::new(3, 4, 3)));
//! assert_eq!(first_overlapping(&plaza, [&vault]), Some(&vault));
//!
//! let record = plaza.to_record();
//! assert_eq!(factory.from_persisted(&record).unwrap(), plaza);
//! ```
//!
//! ## Thread Safety
//!
//! Regions are immutable values and every query is a pure function, so they can be
//! shared across threads without locking. Making a create-or-resize check atomic with
//! its commit is the caller's job.

pub mod config;
pub mod core;
pub mod error;
pub mod regions;
pub mod world;

pub use config::RegionConfig;
pub use error::{RegionError, Result};
pub use regions::{
    first_overlapping, first_overlapping_by, overlapping, Region, RegionFactory, RegionRecord, Shape,
};
