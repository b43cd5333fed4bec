//! Object extraction from labeled volumes
//!
//! A labeled volume holds 0 for background and a label id for every object
//! voxel. Extraction runs in two phases:
//!
//! 1. One raster scan accumulates a [`PointRange`] and a voxel count per
//!    label ([`accumulate_point_ranges`])
//! 2. Every non-empty range becomes a bounding box; boxes whose XY area
//!    reaches the threshold are rescanned to build an [`ObjectMask`]
//!
//! The area threshold ignores depth so that objects thin along z are kept.

use crate::error::{RegionError, RegionResult};
use voxseg_core::{BoundingBox, ObjectCollection, ObjectMask, PointRange, Volume, Voxel};

/// Options for object extraction
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Smallest label id (must be at least 1)
    pub min_label: usize,
    /// Largest label id; `None` uses the largest value in the volume
    pub max_label: Option<usize>,
    /// Minimum XY area of an object's bounding box
    pub min_bbox_area: u64,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_label: 1,
            max_label: None,
            min_bbox_area: 1,
        }
    }
}

impl ExtractOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label range
    pub fn with_label_range(mut self, min_label: usize, max_label: usize) -> Self {
        self.min_label = min_label;
        self.max_label = Some(max_label);
        self
    }

    /// Set the minimum XY bounding-box area
    pub fn with_min_bbox_area(mut self, area: u64) -> Self {
        self.min_bbox_area = area;
        self
    }
}

/// Accumulated extent and size of one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRange {
    /// Label id
    pub label: usize,
    /// Min/max coordinates of the label's voxels
    pub range: PointRange,
    /// Number of voxels carrying the label
    pub voxel_count: usize,
}

/// Scan a labeled volume once, accumulating the point range of each label.
///
/// # Arguments
///
/// * `volume` - Labeled volume (0 = background)
/// * `min_label` - Smallest label id (at least 1)
/// * `max_label` - Largest label id
///
/// # Returns
///
/// One entry per label in `min_label..=max_label`, in label order. Labels
/// that never occur have an empty range and a zero count.
///
/// # Errors
///
/// Returns [`RegionError::Configuration`] for an invalid label range and
/// [`RegionError::LabelOutOfRange`] if a non-zero voxel lies outside it.
pub fn accumulate_point_ranges<V: Voxel>(
    volume: &Volume<V>,
    min_label: usize,
    max_label: usize,
) -> RegionResult<Vec<LabelRange>> {
    if min_label == 0 || min_label > max_label {
        return Err(RegionError::Configuration(format!(
            "invalid label range [{}, {}]",
            min_label, max_label
        )));
    }

    let mut ranges: Vec<LabelRange> = (min_label..=max_label)
        .map(|label| LabelRange {
            label,
            range: PointRange::new(),
            voxel_count: 0,
        })
        .collect();

    let extent = volume.extent();
    let width = extent.width() as usize;

    for z in 0..extent.depth() {
        for (index, &value) in volume.plane(z).iter().enumerate() {
            let label = value.to_usize();
            if label == 0 {
                continue;
            }
            if label < min_label || label > max_label {
                return Err(RegionError::LabelOutOfRange {
                    label,
                    min: min_label,
                    max: max_label,
                });
            }
            let entry = &mut ranges[label - min_label];
            entry
                .range
                .add_xyz((index % width) as i32, (index / width) as i32, z as i32);
            entry.voxel_count += 1;
        }
    }

    Ok(ranges)
}

/// Extract one object mask per label present in a labeled volume.
///
/// # Arguments
///
/// * `volume` - Labeled volume (0 = background)
/// * `options` - Label range and minimum bounding-box area
///
/// # Returns
///
/// The objects in label order. Absent labels and labels whose bounding box
/// has an XY area below `options.min_bbox_area` are skipped.
///
/// # Examples
///
/// ```
/// use voxseg_core::{Extent, Volume};
/// use voxseg_region::{ExtractOptions, extract_objects};
///
/// let extent = Extent::new(5, 5, 1).unwrap();
/// let vol = Volume::from_fn(extent, |x, y, _| if x < 3 && y < 3 { 1u32 } else { 0 });
/// let objects = extract_objects(&vol, &ExtractOptions::default()).unwrap();
/// assert_eq!(objects.len(), 1);
/// assert_eq!(objects.get(0).unwrap().count_on(), 9);
/// ```
pub fn extract_objects<V: Voxel>(
    volume: &Volume<V>,
    options: &ExtractOptions,
) -> RegionResult<ObjectCollection> {
    let max_label = match options.max_label {
        Some(max) => max,
        None => volume.max_value().to_usize(),
    };
    if max_label == 0 {
        tracing::debug!("extract_objects: volume holds background only");
        return Ok(ObjectCollection::new());
    }

    let ranges = accumulate_point_ranges(volume, options.min_label, max_label)?;

    let mut objects = ObjectCollection::new();
    for entry in ranges {
        // Empty ranges (absent labels) yield no box
        let Some(bbox) = entry.range.to_bounding_box() else {
            continue;
        };
        if bbox.area_xy() < options.min_bbox_area {
            continue;
        }
        objects.push(extract_label_in_box(volume, &bbox, V::from_usize(entry.label)));
    }

    tracing::debug!(
        labels = max_label + 1 - options.min_label,
        objects = objects.len(),
        "extracted objects from labeled volume"
    );
    Ok(objects)
}

/// Build the mask of voxels equal to `label` inside `bbox`
fn extract_label_in_box<V: Voxel>(volume: &Volume<V>, bbox: &BoundingBox, label: V) -> ObjectMask {
    let mut mask = ObjectMask::new_empty(*bbox);
    let on = mask.binary_values().on();
    let corner = bbox.corner();
    let box_extent = bbox.extent();

    for z in 0..box_extent.depth() {
        let src = volume.plane(corner.z as u32 + z);
        let dst = mask.voxels_mut().plane_mut(z);
        for y in 0..box_extent.height() {
            let src_row = volume.extent().offset_xy(corner.x as u32, corner.y as u32 + y);
            let dst_row = box_extent.offset_xy(0, y);
            for x in 0..box_extent.width() as usize {
                if src[src_row + x] == label {
                    dst[dst_row + x] = on;
                }
            }
        }
    }
    mask
}
