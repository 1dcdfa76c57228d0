//! # Overlap Resolver
//!
//! Callers enforce "no two bank regions share a block" by asking, before they commit a
//! create or resize, which existing region the candidate would collide with. These
//! functions only answer that question; they store nothing and lock nothing. A caller
//! that creates regions concurrently must hold its own lock across the check and the
//! commit.
//!
//! When resizing, leave the region being replaced out of `existing`, otherwise the new
//! shape always collides with its old self.

use super::Region;

/// The first region in `existing` that `candidate` overlaps, if any.
///
/// # Examples
/// ```
/// use bank_regions::core::Vector3;
/// use bank_regions::world::FixedHeight;
/// use bank_regions::{first_overlapping, RegionFactory};
///
/// let factory = RegionFactory::new(FixedHeight(255));
/// let banks = vec![
///     factory.cuboid_from("world", Vector3::new(0, 0, 0), Vector3::new(9, 9, 9)).unwrap(),
///     factory.cuboid_from("world", Vector3::new(20, 0, 0), Vector3::new(29, 9, 9)).unwrap(),
/// ];
///
/// let candidate = factory.cuboid_from("world", Vector3::new(25, 5, 5), Vector3::new(40, 6, 6)).unwrap();
/// assert_eq!(first_overlapping(&candidate, &banks), Some(&banks[1]));
///
/// let free = factory.cuboid_from("world", Vector3::new(10, 0, 0), Vector3::new(19, 9, 9)).unwrap();
/// assert_eq!(first_overlapping(&free, &banks), None);
/// ```
pub fn first_overlapping<'a, I>(candidate: &Region, existing: I) -> Option<&'a Region>
where
    I: IntoIterator<Item = &'a Region>,
{
    existing.into_iter().find(|region| candidate.overlaps(region))
}

/// Every region in `existing` that `candidate` overlaps, lazily and in order.
pub fn overlapping<'a, 'c, I>(candidate: &'c Region, existing: I) -> impl Iterator<Item = &'a Region> + 'c
where
    'a: 'c,
    I: IntoIterator<Item = &'a Region>,
    I::IntoIter: 'c,
{
    existing
        .into_iter()
        .filter(move |region| candidate.overlaps(region))
}

/// Like [`first_overlapping`], for collections of records that each own a region.
///
/// Returns the record, so the caller can report which bank is in the way.
pub fn first_overlapping_by<T, I, F>(candidate: &Region, existing: I, region_of: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> &Region,
{
    existing
        .into_iter()
        .find(|item| candidate.overlaps(region_of(item)))
}
