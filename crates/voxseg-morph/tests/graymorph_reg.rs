//! Grayscale morphology regression test
//!
//! Compares the sliding-buffer erosion and dilation against a direct
//! neighborhood scan on random volumes.
//!
//! Run with:
//! ```
//! cargo test -p voxseg-morph --test graymorph_reg
//! ```

use voxseg_core::{Extent, Point3i, Volume};
use voxseg_morph::{Connectivity, Neighborhood, dilate_gray, erode_gray, erode_gray_into};
use voxseg_test::{RegParams, init_tracing, random_volume};

/// Rank extreme over the voxel and its in-bounds neighbors, one voxel at a time
fn brute_force(
    vol: &Volume<u8>,
    neighborhood: &Neighborhood,
    pick: fn(u8, u8) -> u8,
) -> Volume<u8> {
    let extent = vol.extent();
    let offsets = neighborhood.offsets(&extent);
    Volume::from_fn(extent, |x, y, z| {
        let center = Point3i::new(x as i32, y as i32, z as i32);
        offsets
            .iter()
            .filter_map(|&d| vol.get_point(center + d))
            .fold(vol.get_unchecked(x, y, z), pick)
    })
}

#[test]
fn graymorph_reg() {
    init_tracing();
    let mut rp = RegParams::new("graymorph");

    let extents = [
        Extent::new_2d(12, 9).unwrap(),
        Extent::new(8, 7, 5).unwrap(),
        Extent::new(1, 1, 4).unwrap(),
    ];
    for (i, &extent) in extents.iter().enumerate() {
        let vol: Volume<u8> = random_volume(extent, 255, 100 + i as u64);
        for connectivity in [Connectivity::Small, Connectivity::Big] {
            for neighborhood in [
                Neighborhood::new(connectivity),
                Neighborhood::new(connectivity).with_3d(false),
            ] {
                let eroded = erode_gray(&vol, &neighborhood);
                rp.compare_volumes(&brute_force(&vol, &neighborhood, u8::min), &eroded);

                let dilated = dilate_gray(&vol, &neighborhood);
                rp.compare_volumes(&brute_force(&vol, &neighborhood, u8::max), &dilated);

                // Erosion never raises a voxel, dilation never lowers one
                let ordered = vol
                    .values()
                    .zip(eroded.values().zip(dilated.values()))
                    .all(|(v, (e, d))| e <= v && v <= d);
                rp.check(ordered, "erosion <= input <= dilation");
            }
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn graymorph_change_flag_reg() {
    let mut rp = RegParams::new("graymorph_change_flag");

    let extent = Extent::new(4, 4, 2).unwrap();
    let neighborhood = Neighborhood::new(Connectivity::Big);

    let flat = Volume::new_filled(extent, 7u8);
    let mut dest = Volume::new(extent);
    let changed = erode_gray_into(&flat, &mut dest, &neighborhood).unwrap();
    rp.check(!changed, "constant volume is an erosion fixpoint");
    rp.compare_volumes(&flat, &dest);

    let mut bump = flat.clone();
    bump.set(1, 1, 1, 9).unwrap();
    let changed = erode_gray_into(&bump, &mut dest, &neighborhood).unwrap();
    rp.check(changed, "isolated peak is eroded");
    rp.compare_volumes(&flat, &dest);

    let small = Extent::new(3, 3, 1).unwrap();
    let mut wrong = Volume::new(small);
    rp.check(
        erode_gray_into(&flat, &mut wrong, &neighborhood).is_err(),
        "mismatched destination is rejected",
    );

    assert!(rp.cleanup());
}
