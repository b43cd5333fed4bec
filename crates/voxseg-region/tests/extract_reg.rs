//! Object extraction regression test
//!
//! Extracts objects from synthetic and random labeled volumes and checks
//! that they partition the labeled voxels.
//!
//! Run with:
//! ```
//! cargo test -p voxseg-region --test extract_reg
//! ```

use voxseg_core::{Extent, Point3i, Volume};
use voxseg_region::{ExtractOptions, extract_objects, paint_labels};
use voxseg_test::{RegParams, init_tracing, labeled_boxes, random_volume};

#[test]
fn extract_reg() {
    init_tracing();
    let mut rp = RegParams::new("extract");

    // Two boxes in a 5x5 plane
    let extent = Extent::new_2d(5, 5).unwrap();
    let vol = labeled_boxes(
        extent,
        &[
            (1, Point3i::new(0, 0, 0), Point3i::new(2, 2, 0)),
            (2, Point3i::new(3, 3, 0), Point3i::new(4, 4, 0)),
        ],
    );
    let objects = extract_objects(&vol, &ExtractOptions::default()).unwrap();
    rp.compare_values(2.0, objects.len() as f64, 0.0);
    rp.compare_values(9.0, objects.get(0).unwrap().count_on() as f64, 0.0);
    rp.compare_values(4.0, objects.get(1).unwrap().count_on() as f64, 0.0);

    // Painting the objects back reproduces the labels
    let painted = paint_labels(&objects, extent).unwrap();
    rp.compare_volumes(&vol, &painted);

    assert!(rp.cleanup());
}

#[test]
fn extract_thin_z_reg() {
    let mut rp = RegParams::new("extract_thin_z");

    // A 4x4 sheet one plane thick keeps its XY area of 16
    let extent = Extent::new(6, 6, 3).unwrap();
    let vol = labeled_boxes(extent, &[(1, Point3i::new(1, 1, 1), Point3i::new(4, 4, 1))]);

    let opts = ExtractOptions::default().with_min_bbox_area(16);
    let objects = extract_objects(&vol, &opts).unwrap();
    rp.compare_values(1.0, objects.len() as f64, 0.0);
    rp.compare_values(1.0, objects.get(0).unwrap().bounding_box().extent().depth() as f64, 0.0);

    let opts = ExtractOptions::default().with_min_bbox_area(17);
    rp.compare_values(0.0, extract_objects(&vol, &opts).unwrap().len() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn extract_random_partition_reg() {
    init_tracing();
    let mut rp = RegParams::new("extract_random_partition");

    let extent = Extent::new(9, 7, 4).unwrap();
    for seed in [1u64, 7, 42] {
        let vol: Volume<u8> = random_volume(extent, 6, seed);
        let objects = extract_objects(&vol, &ExtractOptions::default()).unwrap();

        // Every object voxel carries one label, and together they cover
        // every non-zero voxel exactly once
        let nonzero = extent.volume() - vol.count_equal(0);
        rp.compare_values(nonzero as f64, objects.total_voxels() as f64, 0.0);

        for object in &objects {
            let first = object.first_point().unwrap();
            let label = vol.get_point(first).unwrap();
            let uniform = object.iter_points().all(|p| vol.get_point(p) == Some(label));
            rp.check(uniform, "object voxels share one label");

            let bbox = object.bounding_box();
            let tight = extent
                .iter_points()
                .filter(|&p| vol.get_point(p) == Some(label))
                .all(|p| bbox.contains(p));
            rp.check(tight, "bounding box covers every voxel of the label");
        }
    }

    assert!(rp.cleanup());
}
