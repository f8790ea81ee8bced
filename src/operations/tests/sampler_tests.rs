//! Tests for random and exhaustive patch sampling

extern crate std;

use crate::config::SamplerConfig;
use crate::errors::HoleKitError;
use crate::geometry::{patch_side, Index, Region};
use crate::mask::{Mask, PixelClass};
use crate::operations::RegionSampler;
use super::test_utils::{corridor_mask, sampler_config, seeded_rng, speckled_mask, square_hole_mask};

/// Reference enumeration with explicit per-pixel checks
fn brute_force_valid_regions(mask: &Mask, search: &Region, radius: u32) -> Vec<Region> {
    let side = patch_side(radius) as i64;
    let mut regions = Vec::new();

    for row in search.corner.row..search.end_row() {
        for col in search.corner.col..search.end_col() {
            if row + side > search.end_row() || col + side > search.end_col() {
                continue;
            }

            let mut all_valid = true;
            for d_row in 0..side {
                for d_col in 0..side {
                    if mask.class_at(Index::new(row + d_row, col + d_col)) != Some(PixelClass::Valid) {
                        all_valid = false;
                    }
                }
            }

            if all_valid {
                regions.push(Region::from_parts(row, col, side as u32, side as u32));
            }
        }
    }

    regions
}

#[test]
fn test_enumeration_matches_brute_force() {
    let mask = speckled_mask();
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());

    for (search, radius) in [
        (Region::from_parts(2, 3, 12, 10), 1),
        (mask.full_extent(), 0),
        (mask.full_extent(), 1),
        (Region::from_parts(-3, -3, 10, 10), 1),
    ] {
        let regions = sampler.all_fully_valid_regions(&search, radius);
        std::assert_eq!(regions, brute_force_valid_regions(&mask, &search, radius));

        for region in &regions {
            std::assert!(search.contains_region(region));
            std::assert!(mask.is_valid_region(region));
        }
    }

    std::assert!(!sampler.all_fully_valid_regions(&mask.full_extent(), 1).is_empty());
}

#[test]
fn test_enumeration_is_repeatable() {
    let mask = speckled_mask();
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());
    let search = Region::from_parts(1, 1, 15, 12);

    let first = sampler.all_fully_valid_regions(&search, 1);
    let second = sampler.all_fully_valid_regions(&search, 1);
    std::assert_eq!(first, second);
}

#[test]
fn test_enumeration_over_full_extent() {
    let mask = Mask::new(5, 5, PixelClass::Valid);
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());

    let regions = sampler.all_fully_valid_regions_in_extent(1);
    std::assert_eq!(regions.len(), 9);
    std::assert_eq!(regions[0], Region::from_parts(0, 0, 3, 3));
    std::assert_eq!(regions[8], Region::from_parts(2, 2, 3, 3));
}

#[test]
fn test_enumeration_empty_cases() {
    let mask = Mask::new(10, 10, PixelClass::Valid);
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());

    // Search region smaller than the patch
    std::assert!(sampler.all_fully_valid_regions(&Region::from_parts(0, 0, 4, 4), 2).is_empty());
    std::assert!(sampler.all_fully_valid_regions(&Region::null(), 0).is_empty());
    // Search region entirely outside the mask
    std::assert!(sampler.all_fully_valid_regions(&Region::from_parts(20, 20, 5, 5), 1).is_empty());

    let holes = Mask::new(10, 10, PixelClass::Hole);
    let hole_sampler = RegionSampler::new(&holes, SamplerConfig::default());
    std::assert!(hole_sampler.all_fully_valid_regions_in_extent(0).is_empty());
}

#[test]
fn test_bounded_patch_search_returns_valid_patches() {
    let mask = speckled_mask();
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());
    let search = Region::from_parts(2, 3, 12, 10);

    for seed in 0..40 {
        let mut rng = seeded_rng(seed);
        let region = sampler.random_valid_patch_in_region(&search, 1, 1000, &mut rng).unwrap();
        std::assert!(search.contains_region(&region));
        std::assert!(mask.is_valid_region(&region));
        std::assert_eq!((region.width, region.height), (3, 3));
    }
}

#[test]
fn test_bounded_patch_search_gives_up() {
    let mask = square_hole_mask(20, 5, 14);
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());
    let mut rng = seeded_rng(7);

    let inside_hole = Region::from_parts(5, 5, 10, 10);
    let result = sampler.random_valid_patch_in_region(&inside_hole, 1, 25, &mut rng);
    std::assert!(matches!(result, Err(HoleKitError::NoCandidate { .. })));

    let no_attempts = sampler.random_valid_patch_in_region(&mask.full_extent(), 1, 0, &mut rng);
    std::assert!(matches!(no_attempts, Err(HoleKitError::NoCandidate { .. })));
}

#[test]
fn test_fallback_finds_the_only_valid_patch() {
    let mut mask = Mask::new(30, 30, PixelClass::Hole);
    let only = Region::from_parts(12, 15, 3, 3);
    mask.fill_region(&only, PixelClass::Valid);

    let sampler = RegionSampler::new(&mask, sampler_config(10, 100));
    for seed in 0..10 {
        let mut rng = seeded_rng(seed);
        let region = sampler.random_valid_patch_with_fallback(&mask.full_extent(), 1, &mut rng).unwrap();
        std::assert_eq!(region, only);
    }
}

#[test]
fn test_fallback_fails_when_enumeration_is_empty() {
    let mask = square_hole_mask(20, 5, 14);
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());
    let search = Region::from_parts(4, 4, 12, 12);

    std::assert!(sampler.all_fully_valid_regions(&search, 1).is_empty());

    let mut rng = seeded_rng(3);
    let result = sampler.random_valid_patch_with_fallback(&search, 1, &mut rng);
    std::assert!(matches!(result, Err(HoleKitError::NoCandidate { .. })));
}

#[test]
fn test_fallback_respects_search_region_and_mask() {
    let mask = speckled_mask();
    let sampler = RegionSampler::new(&mask, sampler_config(2, 100));
    let search = Region::from_parts(-4, -4, 14, 14);

    for seed in 0..40 {
        let mut rng = seeded_rng(seed);
        let region = sampler.random_valid_patch_with_fallback(&search, 1, &mut rng).unwrap();
        std::assert!(search.contains_region(&region));
        std::assert!(mask.full_extent().contains_region(&region));
        std::assert!(mask.is_valid_region(&region));
    }
}

#[test]
fn test_random_region_inside_hole() {
    let mask = square_hole_mask(30, 10, 19);
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());

    for seed in 0..20 {
        let mut rng = seeded_rng(seed);
        let region = sampler.random_region_inside_hole(2, &mut rng).unwrap();
        std::assert_eq!((region.width, region.height), (5, 5));
        std::assert!(mask.is_hole_region(&region));
    }
}

#[test]
fn test_random_region_inside_thin_hole_is_bounded() {
    let mask = corridor_mask();
    let sampler = RegionSampler::new(&mask, sampler_config(10, 50));
    let mut rng = seeded_rng(11);

    // A one-row hole admits no 3x3 hole patch
    let result = sampler.random_region_inside_hole(1, &mut rng);
    std::assert!(matches!(result, Err(HoleKitError::NoCandidate { .. })));

    // But every single pixel of it is a 1x1 hole patch
    let pixel = sampler.random_region_inside_hole(0, &mut rng).unwrap();
    std::assert!(mask.is_hole_region(&pixel));
}

#[test]
fn test_random_region_without_candidates() {
    let valid = Mask::new(10, 10, PixelClass::Valid);
    let sampler = RegionSampler::new(&valid, SamplerConfig::default());
    let mut rng = seeded_rng(0);
    std::assert!(matches!(sampler.random_region_inside_hole(0, &mut rng), Err(HoleKitError::NoCandidate { .. })));

    let holes = Mask::new(10, 10, PixelClass::Hole);
    let hole_sampler = RegionSampler::new(&holes, SamplerConfig::default());
    std::assert!(matches!(hole_sampler.random_valid_region(0, &mut rng), Err(HoleKitError::NoCandidate { .. })));
}

#[test]
fn test_random_valid_region() {
    let mask = corridor_mask();
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());

    for seed in 0..20 {
        let mut rng = seeded_rng(seed);
        let region = sampler.random_valid_region(2, &mut rng).unwrap();
        std::assert_eq!((region.width, region.height), (5, 5));
        std::assert!(mask.is_valid_region(&region));
    }
}

#[test]
fn test_same_seed_same_patch() {
    let mask = speckled_mask();
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());

    let first = sampler.random_valid_region(1, &mut seeded_rng(42)).unwrap();
    let second = sampler.random_valid_region(1, &mut seeded_rng(42)).unwrap();
    std::assert_eq!(first, second);

    let search = mask.full_extent();
    let a = sampler.random_valid_patch_with_fallback(&search, 1, &mut seeded_rng(9)).unwrap();
    let b = sampler.random_valid_patch_with_fallback(&search, 1, &mut seeded_rng(9)).unwrap();
    std::assert_eq!(a, b);
}

#[test]
fn test_oversized_radius_has_no_candidates() {
    let valid = Mask::new(10, 10, PixelClass::Valid);
    let sampler = RegionSampler::new(&valid, SamplerConfig::default());
    let holes = square_hole_mask(10, 0, 9);
    let hole_sampler = RegionSampler::new(&holes, SamplerConfig::default());
    let extent = valid.full_extent();
    let mut rng = seeded_rng(5);

    for radius in [u32::MAX, u32::MAX / 2 + 1, 3_000_000_000, 5] {
        std::assert!(sampler.all_fully_valid_regions(&extent, radius).is_empty());
        std::assert!(sampler.all_fully_valid_regions_in_extent(radius).is_empty());

        std::assert!(matches!(sampler.random_valid_region(radius, &mut rng),
                              Err(HoleKitError::NoCandidate { .. })));
        std::assert!(matches!(hole_sampler.random_region_inside_hole(radius, &mut rng),
                              Err(HoleKitError::NoCandidate { .. })));
        std::assert!(matches!(sampler.random_valid_patch_in_region(&extent, radius, 100, &mut rng),
                              Err(HoleKitError::NoCandidate { .. })));
        std::assert!(matches!(sampler.random_valid_patch_with_fallback(&extent, radius, &mut rng),
                              Err(HoleKitError::NoCandidate { .. })));
    }

    // The largest radius that fits still succeeds
    let region = sampler.random_valid_region(4, &mut rng).unwrap();
    std::assert_eq!((region.width, region.height), (9, 9));
    std::assert!(valid.is_valid_region(&region));
    std::assert_eq!(sampler.all_fully_valid_regions_in_extent(4).len(), 4);
}

#[test]
fn test_search_region_at_coordinate_limit_has_no_candidates() {
    let mask = Mask::new(10, 10, PixelClass::Valid);
    let sampler = RegionSampler::new(&mask, SamplerConfig::default());
    let mut rng = seeded_rng(3);

    for search in [Region::from_parts(i64::MAX, 0, 5, 5), Region::from_parts(0, i64::MAX - 1, 5, 5)] {
        std::assert!(sampler.all_fully_valid_regions(&search, 1).is_empty());
        std::assert!(matches!(sampler.random_valid_patch_in_region(&search, 1, 50, &mut rng),
                              Err(HoleKitError::NoCandidate { .. })));
        std::assert!(matches!(sampler.random_valid_patch_with_fallback(&search, 1, &mut rng),
                              Err(HoleKitError::NoCandidate { .. })));
    }
}
