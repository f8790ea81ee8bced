//! Mask-guided region queries
//!
//! Hole traversal, hole bounding boxes, patch sampling and visualisation,
//! all read-only with respect to the mask.

mod traversal;
mod bounding_box;
mod sampler;
mod visualize;
#[cfg(test)]
mod tests;

pub use traversal::find_pixel_across_hole;
pub use bounding_box::compute_hole_bounding_box;
pub use sampler::RegionSampler;
pub use visualize::{masked_composite, mask_overlay};
