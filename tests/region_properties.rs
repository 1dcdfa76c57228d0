use std::collections::HashSet;

use bank_regions::core::{Vector2, Vector3};
use bank_regions::world::FixedHeight;
use bank_regions::{first_overlapping, Region, RegionFactory, RegionRecord};

const SEED: u64 = 0x6261_6e6b;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn factory() -> RegionFactory<FixedHeight> {
    RegionFactory::new(FixedHeight(255))
}

fn cuboid(a: (i32, i32, i32), b: (i32, i32, i32)) -> Region {
    factory().cuboid_from("world", a.into(), b.into()).unwrap()
}

fn polygon(points: &[(i32, i32)], min_y: i32, max_y: i32) -> Region {
    factory()
        .polygon_from("world", points.iter().copied().map(Vector2::from), min_y, max_y)
        .unwrap()
}

fn diamond(radius: i32) -> Region {
    polygon(&[(radius, 0), (0, radius), (-radius, 0), (0, -radius)], 1, 1)
}

fn random_region(rng: &mut fastrand::Rng) -> Region {
    let coord = |rng: &mut fastrand::Rng| rng.i32(-12..=12);
    let y = |rng: &mut fastrand::Rng| rng.i32(0..=6);
    if rng.bool() {
        let a = Vector3::new(coord(rng), y(rng), coord(rng));
        let b = Vector3::new(coord(rng), y(rng), coord(rng));
        factory().cuboid_from("world", a, b).unwrap()
    } else {
        let count = rng.usize(3..=7);
        let vertices: Vec<_> = (0..count)
            .map(|_| Vector2::new(coord(rng), coord(rng)))
            .collect();
        let (a, b) = (y(rng), y(rng));
        factory().polygon_from("world", vertices, a, b).unwrap()
    }
}

/// Overlap by brute force: materialize both cell sets and intersect them.
fn overlaps_by_cells(a: &Region, b: &Region) -> bool {
    if a.max_y() < b.min_y() || a.min_y() > b.max_y() {
        return false;
    }
    let cells: HashSet<Vector2> = a.get_footprint_cells();
    b.get_footprint_cells().iter().any(|cell| cells.contains(cell))
}

#[test]
fn cuboid_normalization_is_commutative() {
    init_logger();
    let a = Vector3::new(0, 9, 5);
    let b = Vector3::new(4, 0, 0);
    let ab = factory().cuboid_from("world", a, b).unwrap();
    let ba = factory().cuboid_from("world", b, a).unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab.get_minimum_block(), ba.get_minimum_block());
    assert_eq!(ab.get_maximum_block(), ba.get_maximum_block());
}

#[test]
fn cuboid_volume_and_center() {
    let region = cuboid((0, 9, 5), (4, 0, 0));
    assert_eq!(region.get_volume(), 300);
    assert_eq!(region.get_center_block(), Vector3::new(2, 4, 2));
}

#[test]
fn square_area_is_order_independent() {
    assert_eq!(polygon(&[(0, 0), (0, 10), (10, 10), (10, 0)], 1, 1).get_volume(), 121);
    assert_eq!(polygon(&[(10, 0), (10, 10), (0, 10), (0, 0)], 1, 1).get_volume(), 121);
}

#[test]
fn degenerate_triangle_has_volume_one() {
    assert_eq!(polygon(&[(0, 0), (0, 0), (0, 0)], 1, 1).get_volume(), 1);
}

#[test]
fn diamond_areas_pin_boundary_rule() {
    assert_eq!(diamond(1).get_volume(), 5);
    assert_eq!(diamond(4).get_volume(), 41);
    assert_eq!(diamond(40).get_volume(), 3281);
}

#[test]
fn cuboid_overlaps_triangle() {
    let box_ = cuboid((1, 0, 1), (5, 9, 5));
    let triangle = polygon(&[(0, 2), (5, 2), (5, -6)], 0, 9);
    assert!(box_.overlaps(&triangle));
    assert!(triangle.overlaps(&box_));
    assert_eq!(first_overlapping(&triangle, [&box_]), Some(&box_));
}

#[test]
fn regions_contain_their_vertices() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..200 {
        let region = random_region(&mut rng);
        for vertex in region.get_vertices() {
            assert!(region.contains(vertex), "{region} should contain {vertex}");
        }
    }
}

#[test]
fn overlap_is_symmetric_and_matches_cell_sets() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(SEED ^ 1);
    for _ in 0..400 {
        let a = random_region(&mut rng);
        let b = random_region(&mut rng);
        let expected = overlaps_by_cells(&a, &b);
        assert_eq!(a.overlaps(&b), expected, "{a} vs {b}");
        assert_eq!(b.overlaps(&a), expected, "{b} vs {a}");
    }
}

#[test]
fn volume_is_layers_times_footprint_cells() {
    let mut rng = fastrand::Rng::with_seed(SEED ^ 2);
    for _ in 0..200 {
        let region = random_region(&mut rng);
        let cells = region.get_footprint_cells();
        assert_eq!(region.get_volume(), region.height() * cells.len() as i64);
        assert!(cells.iter().all(|cell| region.contains_2d(*cell)));
    }
}

#[test]
fn records_round_trip_through_json() {
    let mut rng = fastrand::Rng::with_seed(SEED ^ 3);
    for _ in 0..100 {
        let region = random_region(&mut rng);
        let json = serde_json::to_string(&region.to_record()).unwrap();
        let record: RegionRecord = serde_json::from_str(&json).unwrap();
        let restored = factory().from_persisted(&record).unwrap();
        assert_eq!(restored, region);
        assert_eq!(restored.polygon_vertices(), region.polygon_vertices());
    }
}

#[test]
fn bounding_box_contains_every_footprint_cell() {
    let mut rng = fastrand::Rng::with_seed(SEED ^ 4);
    for _ in 0..100 {
        let region = random_region(&mut rng);
        let min = region.get_minimum_block();
        let max = region.get_maximum_block();
        for cell in region.get_footprint_cells() {
            assert!(min.x <= cell.x && cell.x <= max.x);
            assert!(min.z <= cell.z && cell.z <= max.z);
        }
    }
}
