//! Following a direction across a hole
//!
//! Given a valid pixel on the hole boundary and a direction (typically an
//! isophote), find the first non-hole pixel on the far side of the hole
//! along that line.

use log::debug;

use crate::errors::{HoleKitError, HoleKitResult};
use crate::geometry::{Direction, Index};
use crate::mask::Mask;

/// Find the pixel where the hole ends along a direction
///
/// The direction's sign carries no meaning here: if the first step along
/// `direction` does not land in the hole, the opposite direction is used.
/// When neither neighbour is a hole pixel, that first step is already the
/// exit pixel and is returned as is.
///
/// # Arguments
/// * `query_pixel` - Valid pixel next to the hole
/// * `direction` - Line to follow, in either orientation
/// * `mask` - Hole mask
///
/// # Returns
/// The first pixel past the hole, or an error if `query_pixel` is not
/// valid or the hole reaches the mask border along the line
pub fn find_pixel_across_hole(query_pixel: Index, direction: Direction, mask: &Mask) -> HoleKitResult<Index> {
    if !mask.is_valid(query_pixel) {
        return Err(HoleKitError::InvalidStart(query_pixel));
    }

    let extent = mask.full_extent();

    let mut direction = direction;
    let mut current = direction.step_from(query_pixel)?;
    if !(extent.contains_index(current) && mask.is_hole(current)) {
        direction = direction.negated();
        current = direction.step_from(query_pixel)?;
    }

    if !extent.contains_index(current) {
        return Err(HoleKitError::TraversalOutOfBounds { start: query_pixel, last: query_pixel });
    }

    while mask.is_hole(current) {
        let next = direction.step_from(current)?;
        if !extent.contains_index(next) {
            return Err(HoleKitError::TraversalOutOfBounds { start: query_pixel, last: current });
        }
        current = next;
    }

    debug!("Crossed hole from {} along {} to {}", query_pixel, direction, current);
    Ok(current)
}
