//! Building masks from grayscale images
//!
//! Decoding is left to the `image` crate; this module only classifies the
//! decoded luminance values.

use image::GrayImage;
use log::{debug, info};

use crate::config::MaskConfig;
use crate::errors::HoleKitResult;
use crate::geometry::Index;
use super::grid::Mask;
use super::pixel_class::PixelClass;

impl Mask {
    /// Classify a grayscale image into a mask
    ///
    /// # Arguments
    /// * `image` - Grayscale mask image
    /// * `config` - Threshold and polarity used for classification
    ///
    /// # Returns
    /// A mask of the same size as the image
    pub fn from_luma(image: &GrayImage, config: &MaskConfig) -> Self {
        Mask::from_fn(image.width(), image.height(), |index: Index| {
            let value = image.get_pixel(index.col as u32, index.row as u32)[0];
            let class = if value >= config.hole_threshold {
                PixelClass::Hole
            } else {
                PixelClass::Valid
            };

            if config.invert { class.opposite() } else { class }
        })
    }

    /// Load a mask image from disk
    ///
    /// Any format the `image` crate can decode is accepted; color images are
    /// converted to luminance first.
    pub fn open(path: &str, config: &MaskConfig) -> HoleKitResult<Self> {
        debug!("Loading mask image {} (threshold {}, invert {})",
               path, config.hole_threshold, config.invert);

        let gray = image::open(path)?.to_luma8();
        let mask = Mask::from_luma(&gray, config);

        info!("Loaded {}x{} mask with {} hole pixels",
              mask.width(), mask.height(), mask.hole_count());
        Ok(mask)
    }
}
