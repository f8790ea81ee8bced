//! Tests for the hole bounding box

extern crate std;

use crate::errors::HoleKitError;
use crate::geometry::{Index, Region};
use crate::mask::{Mask, PixelClass};
use crate::operations::compute_hole_bounding_box;
use super::test_utils::square_hole_mask;

#[test]
fn test_inner_square_hole() {
    // Hole where 50 < row < 70 and 50 < col < 70
    let mask = square_hole_mask(100, 51, 69);
    let bbox = compute_hole_bounding_box(&mask).unwrap();
    std::assert_eq!(bbox.corner, Index::new(51, 51));
    std::assert_eq!((bbox.width, bbox.height), (19, 19));
}

#[test]
fn test_rectangular_hole_orientation() {
    let mut mask = Mask::new(60, 20, PixelClass::Valid);
    mask.fill_region(&Region::from_parts(10, 40, 10, 3), PixelClass::Hole);

    let bbox = compute_hole_bounding_box(&mask).unwrap();
    std::assert_eq!(bbox, Region::from_parts(10, 40, 10, 3));
}

#[test]
fn test_scattered_pixels() {
    let mut mask = Mask::new(10, 10, PixelClass::Valid);
    mask.set(Index::new(2, 7), PixelClass::Hole);
    mask.set(Index::new(8, 1), PixelClass::Hole);

    let bbox = compute_hole_bounding_box(&mask).unwrap();
    std::assert_eq!(bbox, Region::from_parts(2, 1, 7, 7));
}

#[test]
fn test_single_pixel_hole() {
    let mut mask = Mask::new(5, 5, PixelClass::Valid);
    mask.set(Index::new(0, 4), PixelClass::Hole);

    let bbox = compute_hole_bounding_box(&mask).unwrap();
    std::assert_eq!(bbox, Region::from_parts(0, 4, 1, 1));
}

#[test]
fn test_mask_without_hole_fails() {
    let mask = Mask::new(10, 10, PixelClass::Valid);
    std::assert!(matches!(compute_hole_bounding_box(&mask), Err(HoleKitError::NoHole)));

    let empty = Mask::new(0, 0, PixelClass::Valid);
    std::assert!(matches!(compute_hole_bounding_box(&empty), Err(HoleKitError::NoHole)));
}
