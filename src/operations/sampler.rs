//! Random and exhaustive patch sampling
//!
//! Patches are squares of side `2 * radius + 1`. The samplers draw patches
//! that lie entirely inside the hole or entirely in valid content, using
//! rejection sampling with a bounded number of attempts. The patch search
//! in a region has a second tier: once cheap random draws stop paying off
//! it enumerates every candidate, so a valid patch is found whenever one
//! exists.
//!
//! The random source is always passed in, which keeps runs reproducible
//! with a seeded generator.

use log::debug;
use rand::Rng;

use crate::config::SamplerConfig;
use crate::errors::{HoleKitError, HoleKitResult};
use crate::geometry::{patch_side, Index, Region};
use crate::mask::{Mask, PixelClass};

/// Patch sampler over a borrowed mask
pub struct RegionSampler<'a> {
    /// Mask the patches are tested against
    mask: &'a Mask,
    /// Attempt budgets
    config: SamplerConfig,
}

impl<'a> RegionSampler<'a> {
    /// Create a new sampler
    ///
    /// # Arguments
    /// * `mask` - Hole mask, read-only for the sampler's lifetime
    /// * `config` - Attempt budgets for the random searches
    pub fn new(mask: &'a Mask, config: SamplerConfig) -> Self {
        RegionSampler { mask, config }
    }

    /// Random patch lying entirely inside the hole
    ///
    /// A hole pixel is drawn uniformly as the patch center; draws are
    /// repeated until the whole patch is hole, up to
    /// `max_rejection_attempts` times.
    pub fn random_region_inside_hole<R: Rng + ?Sized>(&self, half_width: u32, rng: &mut R) -> HoleKitResult<Region> {
        self.random_region_of_class(PixelClass::Hole, half_width, rng)
    }

    /// Random patch lying entirely in valid content
    ///
    /// Same procedure as `random_region_inside_hole`, drawing centers from
    /// the valid pixels.
    pub fn random_valid_region<R: Rng + ?Sized>(&self, half_width: u32, rng: &mut R) -> HoleKitResult<Region> {
        self.random_region_of_class(PixelClass::Valid, half_width, rng)
    }

    fn random_region_of_class<R: Rng + ?Sized>(&self, class: PixelClass, half_width: u32, rng: &mut R) -> HoleKitResult<Region> {
        let side = patch_side(half_width);
        if side > self.mask.width() as u64 || side > self.mask.height() as u64 {
            return Err(HoleKitError::NoCandidate {
                reason: format!("{}x{} patch does not fit in the {}x{} mask",
                                side, side, self.mask.width(), self.mask.height()),
            });
        }

        let centers = self.mask.pixels_in_region(&self.mask.full_extent(), class);
        if centers.is_empty() {
            return Err(HoleKitError::NoCandidate {
                reason: format!("mask has no {} pixels", class),
            });
        }

        let attempts = self.config.max_rejection_attempts;
        for attempt in 1..=attempts {
            let center = centers[rng.random_range(0..centers.len())];
            let region = match Region::around_pixel(center, half_width) {
                Some(region) => region,
                None => break,
            };

            if self.mask.is_region_of_class(&region, class) {
                debug!("Found {} patch {} after {} attempts", class, region, attempt);
                return Ok(region);
            }
        }

        Err(HoleKitError::NoCandidate {
            reason: format!("no fully {} {}x{} patch found in {} attempts", class, side, side, attempts),
        })
    }

    /// Every fully valid patch inside a search region
    ///
    /// Each pixel of the search region is tried as the top-left corner of a
    /// patch; the patch is kept if it fits in the search region and every
    /// pixel is valid. Results are in row-major scan order of the corners.
    pub fn all_fully_valid_regions(&self, search_region: &Region, patch_radius: u32) -> Vec<Region> {
        let corners = match corner_range(search_region, patch_radius) {
            Some(corners) => corners,
            None => return Vec::new(),
        };

        corners.indices()
            .filter_map(|corner| Region::square_at(corner, patch_radius))
            .filter(|region| self.mask.is_valid_region(region))
            .collect()
    }

    /// Every fully valid patch in the whole mask
    pub fn all_fully_valid_regions_in_extent(&self, patch_radius: u32) -> Vec<Region> {
        self.all_fully_valid_regions(&self.mask.full_extent(), patch_radius)
    }

    /// Random fully valid patch in a search region, giving up after `max_attempts` draws
    ///
    /// Corners are drawn uniformly among the positions where the patch fits
    /// in the search region.
    pub fn random_valid_patch_in_region<R: Rng + ?Sized>(
        &self,
        search_region: &Region,
        patch_radius: u32,
        max_attempts: u32,
        rng: &mut R,
    ) -> HoleKitResult<Region> {
        self.draw_valid_patch(search_region, patch_radius, max_attempts, rng)
            .ok_or_else(|| HoleKitError::NoCandidate {
                reason: format!("no valid patch of radius {} in {} after {} attempts",
                                patch_radius, search_region, max_attempts),
            })
    }

    /// Random fully valid patch in a search region, with exhaustive fallback
    ///
    /// Tries `fallback_threshold` random draws first. If none succeeds,
    /// every valid patch in the search region is enumerated and one is
    /// picked uniformly, so this only fails when no valid patch exists.
    pub fn random_valid_patch_with_fallback<R: Rng + ?Sized>(
        &self,
        search_region: &Region,
        patch_radius: u32,
        rng: &mut R,
    ) -> HoleKitResult<Region> {
        if let Some(region) = self.draw_valid_patch(search_region, patch_radius, self.config.fallback_threshold, rng) {
            return Ok(region);
        }

        debug!("Searching all patches in {} for a valid patch", search_region);
        let candidates = self.all_fully_valid_regions(search_region, patch_radius);
        if candidates.is_empty() {
            return Err(HoleKitError::NoCandidate {
                reason: format!("no valid patch of radius {} exists in {}", patch_radius, search_region),
            });
        }

        debug!("Picking among {} valid patches", candidates.len());
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    fn draw_valid_patch<R: Rng + ?Sized>(
        &self,
        search_region: &Region,
        patch_radius: u32,
        max_attempts: u32,
        rng: &mut R,
    ) -> Option<Region> {
        let corners = corner_range(search_region, patch_radius)?;

        for _ in 0..max_attempts {
            let corner = Index::new(
                rng.random_range(corners.corner.row..corners.end_row()),
                rng.random_range(corners.corner.col..corners.end_col()),
            );
            let region = Region::square_at(corner, patch_radius)?;

            // is_valid_region also rejects patches leaving the mask
            if self.mask.is_valid_region(&region) {
                return Some(region);
            }
        }

        None
    }
}

/// Positions where a patch's top-left corner keeps it inside `search_region`
///
/// None when the patch is larger than the search region, or when the search
/// region runs past the `i64` coordinate limit.
fn corner_range(search_region: &Region, patch_radius: u32) -> Option<Region> {
    let side = patch_side(patch_radius);
    let width = search_region.width as u64;
    let height = search_region.height as u64;
    if width < side || height < side || !search_region.has_exact_end() {
        return None;
    }

    // Both spans are at most the search region's own u32 size
    Some(Region::new(
        search_region.corner,
        (width - side + 1) as u32,
        (height - side + 1) as u32,
    ))
}
