//! Mask visualisation helpers
//!
//! Produce images for inspecting a mask: the source image with its hole
//! painted over, or a transparent overlay marking only the hole.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use log::info;

use crate::errors::{HoleKitError, HoleKitResult};
use crate::geometry::Index;
use crate::mask::Mask;

/// Copy an image, painting every hole pixel with a solid color
///
/// # Arguments
/// * `image` - Source image, same size as the mask
/// * `mask` - Hole mask
/// * `hole_color` - RGB color for hole pixels
pub fn masked_composite(image: &RgbImage, mask: &Mask, hole_color: [u8; 3]) -> HoleKitResult<RgbImage> {
    check_dimensions(image.width(), image.height(), mask)?;

    info!("Compositing {}x{} image with {} hole pixels",
          image.width(), image.height(), mask.hole_count());

    Ok(RgbImage::from_fn(image.width(), image.height(), |x, y| {
        if mask.is_valid(Index::new(y as i64, x as i64)) {
            *image.get_pixel(x, y)
        } else {
            Rgb(hole_color)
        }
    }))
}

/// Overlay with hole pixels opaque red and valid pixels fully transparent
pub fn mask_overlay(mask: &Mask) -> RgbaImage {
    RgbaImage::from_fn(mask.width(), mask.height(), |x, y| {
        if mask.is_hole(Index::new(y as i64, x as i64)) {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn check_dimensions(width: u32, height: u32, mask: &Mask) -> HoleKitResult<()> {
    if width != mask.width() || height != mask.height() {
        return Err(HoleKitError::DimensionMismatch {
            expected: (mask.width(), mask.height()),
            found: (width, height),
        });
    }
    Ok(())
}
