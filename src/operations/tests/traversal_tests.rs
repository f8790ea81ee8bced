//! Tests for crossing a hole along a direction

extern crate std;

use crate::errors::HoleKitError;
use crate::geometry::{Direction, Index, Region};
use crate::mask::{Mask, PixelClass};
use crate::operations::find_pixel_across_hole;
use super::test_utils::{corridor_mask, square_hole_mask};

#[test]
fn test_crosses_horizontal_corridor() {
    let mask = corridor_mask();
    let exit = find_pixel_across_hole(Index::new(5, 9), Direction::new(1.0, 0.0), &mask).unwrap();
    std::assert_eq!(exit, Index::new(5, 20));
}

#[test]
fn test_direction_sign_does_not_matter() {
    let mask = corridor_mask();
    let exit = find_pixel_across_hole(Index::new(5, 9), Direction::new(-4.0, 0.0), &mask).unwrap();
    std::assert_eq!(exit, Index::new(5, 20));

    // And back again from the far side
    let back = find_pixel_across_hole(Index::new(5, 20), Direction::new(1.0, 0.0), &mask).unwrap();
    std::assert_eq!(back, Index::new(5, 9));
}

#[test]
fn test_crosses_diagonally() {
    let mask = square_hole_mask(10, 3, 6);
    let exit = find_pixel_across_hole(Index::new(2, 2), Direction::new(1.0, 1.0), &mask).unwrap();
    std::assert_eq!(exit, Index::new(7, 7));
}

#[test]
fn test_hole_start_is_rejected() {
    let mask = corridor_mask();
    let result = find_pixel_across_hole(Index::new(5, 12), Direction::new(1.0, 0.0), &mask);
    std::assert!(matches!(result, Err(HoleKitError::InvalidStart(index)) if index == Index::new(5, 12)));

    let outside = find_pixel_across_hole(Index::new(-1, 0), Direction::new(1.0, 0.0), &mask);
    std::assert!(matches!(outside, Err(HoleKitError::InvalidStart(_))));
}

#[test]
fn test_hole_reaching_border_fails() {
    let mut mask = Mask::new(30, 10, PixelClass::Valid);
    mask.fill_region(&Region::from_parts(5, 10, 20, 1), PixelClass::Hole);

    let result = find_pixel_across_hole(Index::new(5, 9), Direction::new(1.0, 0.0), &mask);
    match result {
        Err(HoleKitError::TraversalOutOfBounds { start, last }) => {
            std::assert_eq!(start, Index::new(5, 9));
            std::assert_eq!(last, Index::new(5, 29));
        }
        other => panic!("expected TraversalOutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_no_hole_on_either_side_returns_first_step() {
    let mask = corridor_mask();
    let exit = find_pixel_across_hole(Index::new(2, 2), Direction::new(1.0, 0.0), &mask).unwrap();
    std::assert_eq!(exit, Index::new(2, 1));
}

#[test]
fn test_first_step_off_the_mask_fails() {
    let mask = corridor_mask();

    // Upward step leaves the mask, so the downward neighbour is used
    let flipped = find_pixel_across_hole(Index::new(0, 0), Direction::new(0.0, -1.0), &mask).unwrap();
    std::assert_eq!(flipped, Index::new(1, 0));

    // Rightward neighbour is valid, leftward one is off the mask
    let edge = find_pixel_across_hole(Index::new(3, 0), Direction::new(1.0, 0.0), &mask);
    std::assert!(matches!(edge, Err(HoleKitError::TraversalOutOfBounds { .. })));
}

#[test]
fn test_zero_direction_is_rejected() {
    let mask = corridor_mask();
    let result = find_pixel_across_hole(Index::new(5, 9), Direction::new(0.0, 0.0), &mask);
    std::assert!(matches!(result, Err(HoleKitError::InvalidDirection)));
}
