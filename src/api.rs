use std::fmt;
use std::str::FromStr;

use log::info;
use rand::Rng;

use crate::config::HoleKitConfig;
use crate::errors::{HoleKitError, HoleKitResult};
use crate::geometry::{Direction, Index, Region};
use crate::mask::Mask;
use crate::operations::{self, RegionSampler};
use crate::utils::logger::Logger;

/// Kind of patch to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// Patch centred on a hole pixel and entirely inside the hole
    Hole,
    /// Patch centred on a valid pixel and entirely valid
    Valid,
    /// Fully valid patch inside a search region
    Patch,
}

impl FromStr for SampleMode {
    type Err = HoleKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hole" => Ok(SampleMode::Hole),
            "valid" => Ok(SampleMode::Valid),
            "patch" => Ok(SampleMode::Patch),
            _ => Err(HoleKitError::GenericError(format!("Unknown sample mode: {} (expected hole, valid or patch)", s))),
        }
    }
}

impl fmt::Display for SampleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleMode::Hole => write!(f, "hole"),
            SampleMode::Valid => write!(f, "valid"),
            SampleMode::Patch => write!(f, "patch"),
        }
    }
}

/// Parameters of a single sampling request
#[derive(Debug, Clone, Copy)]
pub struct SampleRequest {
    /// Kind of patch
    pub mode: SampleMode,
    /// Patch radius (side is `2 * radius + 1`)
    pub radius: u32,
    /// Search region for `Patch` mode; the whole mask if None
    pub search: Option<Region>,
    /// Attempt budget for `Patch` mode; None enables the exhaustive fallback
    pub attempts: Option<u32>,
}

/// Main interface to the holekit library
pub struct HoleKit {
    logger: Logger,
    config: HoleKitConfig,
}

impl HoleKit {
    /// Create a new HoleKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "holekit.log"
    /// * `config` - Mask, sampler and overlay settings
    ///
    /// # Returns
    /// A HoleKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>, config: HoleKitConfig) -> HoleKitResult<Self> {
        let log_path = log_file.unwrap_or("holekit.log");
        let logger = Logger::new(log_path)?;
        Ok(HoleKit { logger, config })
    }

    /// Settings in use
    pub fn config(&self) -> &HoleKitConfig {
        &self.config
    }

    /// Load and classify a mask image
    pub fn load_mask(&self, path: &str) -> HoleKitResult<Mask> {
        let mask = Mask::open(path, &self.config.mask)?;
        self.logger.log(&format!("Mask {}: {}x{}, {} hole pixels",
                                 path, mask.width(), mask.height(), mask.hole_count()))?;
        Ok(mask)
    }

    /// Bounding box of the hole
    pub fn hole_bounding_box(&self, mask: &Mask) -> HoleKitResult<Region> {
        let bbox = operations::compute_hole_bounding_box(mask)?;
        info!("Hole bounding box: {}", bbox);
        self.logger.log(&format!("Hole bounding box: {}", bbox))?;
        Ok(bbox)
    }

    /// Follow a direction from a valid pixel to the far side of the hole
    pub fn cross_hole(&self, mask: &Mask, start: Index, direction: Direction) -> HoleKitResult<Index> {
        let exit = operations::find_pixel_across_hole(start, direction, mask)?;
        info!("Pixel across the hole from {} along {}: {}", start, direction, exit);
        self.logger.log(&format!("Crossed hole {} -> {}", start, exit))?;
        Ok(exit)
    }

    /// Sampler over `mask` using the configured attempt budgets
    pub fn sampler<'m>(&self, mask: &'m Mask) -> RegionSampler<'m> {
        RegionSampler::new(mask, self.config.sampler)
    }

    /// Draw one patch as described by `request`
    pub fn sample<R: Rng + ?Sized>(&self, mask: &Mask, request: &SampleRequest, rng: &mut R) -> HoleKitResult<Region> {
        let sampler = self.sampler(mask);
        let search = request.search.unwrap_or_else(|| mask.full_extent());

        match request.mode {
            SampleMode::Hole => sampler.random_region_inside_hole(request.radius, rng),
            SampleMode::Valid => sampler.random_valid_region(request.radius, rng),
            SampleMode::Patch => match request.attempts {
                Some(attempts) => sampler.random_valid_patch_in_region(&search, request.radius, attempts, rng),
                None => sampler.random_valid_patch_with_fallback(&search, request.radius, rng),
            },
        }
    }

    /// Every fully valid patch in `search`, or in the whole mask
    pub fn enumerate(&self, mask: &Mask, search: Option<Region>, radius: u32) -> HoleKitResult<Vec<Region>> {
        let sampler = self.sampler(mask);
        let regions = match search {
            Some(search) => sampler.all_fully_valid_regions(&search, radius),
            None => sampler.all_fully_valid_regions_in_extent(radius),
        };

        info!("Found {} fully valid patches of radius {}", regions.len(), radius);
        self.logger.log_regions("Fully valid patches", &regions)?;
        Ok(regions)
    }

    /// Write a visualisation of the mask
    ///
    /// With an input image, writes the image with its hole painted in the
    /// configured color; otherwise writes a transparent overlay (PNG
    /// recommended, since the overlay relies on alpha).
    pub fn write_overlay(&self, mask: &Mask, output_path: &str, image_path: Option<&str>) -> HoleKitResult<()> {
        match image_path {
            Some(path) => {
                let image = image::open(path)?.to_rgb8();
                let composite = operations::masked_composite(&image, mask, self.config.overlay.hole_color)?;
                composite.save(output_path)?;
            }
            None => {
                operations::mask_overlay(mask).save(output_path)?;
            }
        }

        info!("Wrote mask visualisation to {}", output_path);
        self.logger.log(&format!("Wrote mask visualisation to {}", output_path))?;
        Ok(())
    }
}
