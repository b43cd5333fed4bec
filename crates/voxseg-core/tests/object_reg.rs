//! Object mask regression test
//!
//! Exercises bounding boxes, unions and clipping of object masks built from
//! synthetic point sets.
//!
//! Run with:
//! ```
//! cargo test -p voxseg-core --test object_reg
//! ```

use voxseg_core::{BoundingBox, Extent, ObjectMask, Point3i, PointRange};
use voxseg_test::{RegParams, volume_from_planes};

fn cube(min: Point3i, size: i32) -> ObjectMask {
    let points = (0..size).flat_map(move |z| {
        (0..size).flat_map(move |y| (0..size).map(move |x| min + Point3i::new(x, y, z)))
    });
    ObjectMask::from_points(points).unwrap()
}

#[test]
fn object_reg() {
    let mut rp = RegParams::new("object");

    let a = cube(Point3i::new(0, 0, 0), 2);
    let b = cube(Point3i::new(1, 1, 1), 2);
    rp.compare_values(8.0, a.count_on() as f64, 0.0);
    rp.compare_values(1.0, a.count_intersecting(&b) as f64, 0.0);

    let union = a.union(&b);
    rp.compare_values(15.0, union.count_on() as f64, 0.0);
    rp.compare_boxes(
        &BoundingBox::from_inclusive_corners(Point3i::new(0, 0, 0), Point3i::new(2, 2, 2)),
        union.bounding_box(),
    );
    rp.check(union.first_point() == Some(Point3i::new(0, 0, 0)), "first point of union");

    // Clipping to a 2x2x2 volume keeps the voxels of `a` plus (1, 1, 1)
    let clipped = union.clip_to(&Extent::new(2, 2, 2).unwrap()).unwrap();
    rp.compare_values(8.0, clipped.count_on() as f64, 0.0);
    rp.check(union.clip_to(&Extent::new_2d(1, 1).unwrap()).is_some(), "corner voxel survives");

    // A point range over the on voxels reproduces the box
    let mut range = PointRange::new();
    for p in b.iter_points() {
        range.add(p);
    }
    rp.compare_boxes(b.bounding_box(), &range.to_bounding_box().unwrap());

    assert!(rp.cleanup());
}

#[test]
fn volume_fixture_reg() {
    let mut rp = RegParams::new("volume_fixture");

    let vol = volume_from_planes::<u16>(&[&[&[1, 2], &[3, 4]], &[&[5, 6], &[7, 8]]]).unwrap();
    rp.check(vol.extent() == Extent::new(2, 2, 2).unwrap(), "fixture extent");
    rp.compare_values(8.0, vol.max_value() as f64, 0.0);
    rp.compare_values(7.0, vol.get(0, 1, 1).unwrap() as f64, 0.0);

    let mut inverted = vol.clone();
    inverted.invert_in_place();
    rp.compare_values((u16::MAX - 1) as f64, inverted.get(0, 0, 0).unwrap() as f64, 0.0);

    assert!(rp.cleanup());
}
