//! Object merge regression test
//!
//! Drives the merge engine over small synthetic collections and checks
//! termination, tie-breaking and error propagation.
//!
//! Run with:
//! ```
//! cargo test -p voxseg-merge --test merge_reg
//! ```

use voxseg_core::{ObjectCollection, ObjectMask, Point3i, Resolution};
use voxseg_merge::{
    DistanceThreshold, EdgePriority, MaxVoxelCount, MergeEngine, MergeEngineBuilder, MergeError,
    PayloadIncrease, PayloadRatio, Touching, VoxelCountPayload,
};
use voxseg_morph::Connectivity;
use voxseg_test::{RegParams, init_tracing};

/// Single-voxel objects along the x axis
fn voxel_row(xs: &[i32]) -> ObjectCollection {
    xs.iter()
        .map(|&x| ObjectMask::from_points([Point3i::new(x, 0, 0)]).unwrap())
        .collect()
}

fn ratio_engine() -> MergeEngine {
    MergeEngineBuilder::new()
        .with_before_condition(Touching::new(Connectivity::Small))
        .with_priority(PayloadRatio)
        .with_payload(VoxelCountPayload)
        .build()
        .unwrap()
}

#[test]
fn merge_chain_reg() {
    init_tracing();
    let mut rp = RegParams::new("merge_chain");

    // Eight touching voxels collapse into one object in seven merges
    let engine = ratio_engine();
    let (merged, report) = engine.merge_with_report(voxel_row(&[0, 1, 2, 3, 4, 5, 6, 7])).unwrap();
    rp.compare_values(1.0, merged.len() as f64, 0.0);
    rp.compare_values(7.0, report.merges as f64, 0.0);
    rp.compare_values(8.0, merged.get(0).unwrap().count_on() as f64, 0.0);

    // Two separated runs stay apart
    let (merged, report) = engine.merge_with_report(voxel_row(&[0, 1, 2, 10, 11])).unwrap();
    rp.compare_values(2.0, merged.len() as f64, 0.0);
    rp.compare_values(3.0, report.merges as f64, 0.0);
    rp.check(report.merges < report.initial_objects, "at most N - 1 merges");

    // Driving the graph by hand ends with no eligible edge
    let mut graph = engine.graph(voxel_row(&[0, 1, 2, 3])).unwrap();
    let mut merges = 0;
    while let Some(edge) = graph.find_max_priority() {
        graph.merge(edge).unwrap();
        merges += 1;
    }
    rp.compare_values(3.0, merges as f64, 0.0);
    rp.compare_values(0.0, graph.eligible_edge_count() as f64, 0.0);
    rp.compare_values(1.0, graph.vertex_count() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn merge_tie_break_reg() {
    let mut rp = RegParams::new("merge_tie_break");

    // Both edges carry priority 1.0; the pair whose union starts at the
    // smallest point (0, 0, 0) goes first
    let engine = ratio_engine();
    let mut graph = engine.graph(voxel_row(&[0, 1, 2])).unwrap();
    let first = graph.find_max_priority().unwrap();
    let edge = graph.edge(first).unwrap();
    rp.check(
        edge.representative() == Some(Point3i::new(0, 0, 0)),
        "tie goes to the smaller representative point",
    );
    let merged = graph.merge(first).unwrap();
    rp.compare_values(2.0, graph.vertex(merged).unwrap().voxel_count() as f64, 0.0);

    // Repeated runs give identical results
    let xs = [4, 0, 2, 1, 3, 9, 8];
    let a = engine.merge_objects(voxel_row(&xs)).unwrap();
    let b = engine.merge_objects(voxel_row(&xs)).unwrap();
    rp.check(a.as_slice() == b.as_slice(), "merge runs are deterministic");

    assert!(rp.cleanup());
}

#[test]
fn merge_signed_zero_tie_reg() {
    let mut rp = RegParams::new("merge_signed_zero_tie");

    // The pair at x = 0 scores -0.0 and the pair at x = 10 scores 0.0.
    // The two are equal, so the smaller representative still decides.
    let engine = MergeEngineBuilder::new()
        .with_before_condition(Touching::default())
        .with_priority_fn(|_, _, merged, _| {
            let starts_at_origin = merged.object().first_point().map(|p| p.x) == Some(0);
            Ok(EdgePriority::eligible(if starts_at_origin { -0.0 } else { 0.0 }))
        })
        .with_payload(VoxelCountPayload)
        .build()
        .unwrap();
    let graph = engine.graph(voxel_row(&[0, 1, 10, 11])).unwrap();
    rp.compare_values(2.0, graph.eligible_edge_count() as f64, 0.0);

    let first = graph.find_max_priority().unwrap();
    let edge = graph.edge(first).unwrap();
    rp.check(
        edge.representative() == Some(Point3i::new(0, 0, 0)),
        "-0.0 and 0.0 tie on the representative point",
    );
    rp.check(
        edge.priority().priority.is_sign_positive(),
        "stored priority is normalized to 0.0",
    );

    assert!(rp.cleanup());
}

#[test]
fn merge_conditions_reg() {
    let mut rp = RegParams::new("merge_conditions");

    // The size cap leaves pairs
    let engine = MergeEngineBuilder::new()
        .with_before_condition(Touching::default())
        .with_after_condition(MaxVoxelCount(2))
        .with_priority(PayloadRatio)
        .with_payload(VoxelCountPayload)
        .build()
        .unwrap();
    let merged = engine.merge_objects(voxel_row(&[0, 1, 2, 3])).unwrap();
    rp.compare_values(2.0, merged.len() as f64, 0.0);
    rp.check(merged.iter().all(|o| o.count_on() == 2), "every object holds two voxels");

    // A payload that never grows makes no edge eligible
    let engine = MergeEngineBuilder::new()
        .with_before_condition(Touching::default())
        .with_priority(PayloadIncrease)
        .with_payload_fn(|_| Ok(1.0))
        .build()
        .unwrap();
    let merged = engine.merge_objects(voxel_row(&[0, 1, 2])).unwrap();
    rp.compare_values(3.0, merged.len() as f64, 0.0);

    // Custom priority closure: never merge
    let engine = MergeEngineBuilder::new()
        .with_priority_fn(|_, _, _, _| Ok(EdgePriority::ineligible(0.0)))
        .with_payload(VoxelCountPayload)
        .build()
        .unwrap();
    let graph = engine.graph(voxel_row(&[0, 5, 9])).unwrap();
    rp.compare_values(3.0, graph.edge_count() as f64, 0.0);
    rp.check(graph.find_max_priority().is_none(), "ineligible edges are never selected");

    // Physical distance through the resolution
    let engine = MergeEngineBuilder::new()
        .with_before_condition(DistanceThreshold::physical(1.0))
        .with_priority(PayloadRatio)
        .with_payload(VoxelCountPayload)
        .with_resolution(Resolution::new(0.25, 0.25, 1.0).unwrap())
        .build()
        .unwrap();
    let merged = engine.merge_objects(voxel_row(&[0, 4, 20])).unwrap();
    rp.compare_values(2.0, merged.len() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn merge_failure_reg() {
    let mut rp = RegParams::new("merge_failure");

    // Missing resolution for a physical threshold
    let engine = MergeEngineBuilder::new()
        .with_before_condition(DistanceThreshold::physical(1.0))
        .with_priority(PayloadRatio)
        .with_payload(VoxelCountPayload)
        .build()
        .unwrap();
    rp.check(
        matches!(
            engine.merge_objects(voxel_row(&[0, 1])),
            Err(MergeError::OperationFailed(_))
        ),
        "physical threshold without resolution fails",
    );

    // A payload failing on large objects aborts the run
    let engine = MergeEngineBuilder::new()
        .with_before_condition(Touching::default())
        .with_priority(PayloadRatio)
        .with_payload_fn(|object| {
            if object.count_on() > 2 {
                Err(MergeError::OperationFailed("object too large to score".into()))
            } else {
                Ok(object.count_on() as f64)
            }
        })
        .build()
        .unwrap();
    rp.check(
        matches!(
            engine.merge_objects(voxel_row(&[0, 1, 2])),
            Err(MergeError::OperationFailed(_))
        ),
        "payload failure aborts the merge",
    );

    assert!(rp.cleanup());
}
