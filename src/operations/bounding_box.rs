//! Tight bounding box of the hole

use log::debug;

use crate::errors::{HoleKitError, HoleKitResult};
use crate::geometry::Region;
use crate::mask::Mask;

/// Compute the smallest region enclosing every hole pixel
///
/// # Returns
/// The inclusive bounding box, or `NoHole` if the mask has no hole pixels
pub fn compute_hole_bounding_box(mask: &Mask) -> HoleKitResult<Region> {
    let mut bounds: Option<(i64, i64, i64, i64)> = None;

    for index in mask.full_extent().indices() {
        if !mask.is_hole(index) {
            continue;
        }

        bounds = Some(match bounds {
            None => (index.row, index.col, index.row, index.col),
            Some((min_row, min_col, max_row, max_col)) => (
                min_row.min(index.row),
                min_col.min(index.col),
                max_row.max(index.row),
                max_col.max(index.col),
            ),
        });
    }

    let (min_row, min_col, max_row, max_col) = bounds.ok_or(HoleKitError::NoHole)?;

    // Bounds are inclusive, hence the +1
    let region = Region::from_parts(
        min_row,
        min_col,
        (max_col - min_col + 1) as u32,
        (max_row - min_row + 1) as u32,
    );

    debug!("Hole bounding box: {}", region);
    Ok(region)
}
