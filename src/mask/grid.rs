//! Hole mask grid and its read-only query interface
//!
//! The mask is a row-major grid of `PixelClass` values co-extensive with the
//! image being completed. All region predicates treat pixels outside the
//! grid as neither valid nor hole, so a region that leaves the mask never
//! satisfies a predicate.

use crate::geometry::{Index, Region};
use super::pixel_class::PixelClass;

/// Classification of every pixel of an image into valid and hole
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    pixels: Vec<PixelClass>,
}

impl Mask {
    /// Create a mask with every pixel set to `fill`
    pub fn new(width: u32, height: u32, fill: PixelClass) -> Self {
        Mask {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Create a mask by classifying each pixel with a function
    pub fn from_fn<F>(width: u32, height: u32, mut classify: F) -> Self
    where
        F: FnMut(Index) -> PixelClass,
    {
        let extent = Region::from_parts(0, 0, width, height);
        let pixels = extent.indices().map(|index| classify(index)).collect();
        Mask { width, height, pixels }
    }

    /// Width in pixels (number of columns)
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels (number of rows)
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The region covering the whole mask
    pub fn full_extent(&self) -> Region {
        Region::from_parts(0, 0, self.width, self.height)
    }

    fn offset_of(&self, index: Index) -> Option<usize> {
        if index.row < 0 || index.col < 0 ||
            index.row >= self.height as i64 || index.col >= self.width as i64 {
            return None;
        }
        Some(index.row as usize * self.width as usize + index.col as usize)
    }

    /// Classification of a pixel, or None outside the mask
    pub fn class_at(&self, index: Index) -> Option<PixelClass> {
        self.offset_of(index).map(|offset| self.pixels[offset])
    }

    /// Set the classification of a pixel; out-of-bounds writes are ignored
    pub fn set(&mut self, index: Index, class: PixelClass) {
        if let Some(offset) = self.offset_of(index) {
            self.pixels[offset] = class;
        }
    }

    /// Set every in-bounds pixel of a region to `class`
    pub fn fill_region(&mut self, region: &Region, class: PixelClass) {
        if let Some(clipped) = region.intersection(&self.full_extent()) {
            for index in clipped.indices() {
                self.set(index, class);
            }
        }
    }

    /// Whether a pixel is inside the mask and valid
    pub fn is_valid(&self, index: Index) -> bool {
        self.class_at(index) == Some(PixelClass::Valid)
    }

    /// Whether a pixel is inside the mask and a hole
    pub fn is_hole(&self, index: Index) -> bool {
        self.class_at(index) == Some(PixelClass::Hole)
    }

    /// Whether a region lies inside the mask with every pixel of `class`
    pub fn is_region_of_class(&self, region: &Region, class: PixelClass) -> bool {
        self.full_extent().contains_region(region) &&
            region.indices().all(|index| self.class_at(index) == Some(class))
    }

    /// Whether every pixel of the region is valid
    pub fn is_valid_region(&self, region: &Region) -> bool {
        self.is_region_of_class(region, PixelClass::Valid)
    }

    /// Whether every pixel of the region is a hole
    pub fn is_hole_region(&self, region: &Region) -> bool {
        self.is_region_of_class(region, PixelClass::Hole)
    }

    /// Pixels of `class` inside the region, in scan order
    pub fn pixels_in_region(&self, region: &Region, class: PixelClass) -> Vec<Index> {
        match region.intersection(&self.full_extent()) {
            Some(clipped) => clipped.indices()
                .filter(|index| self.class_at(*index) == Some(class))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Hole pixels inside the region, in scan order
    pub fn hole_pixels_in_region(&self, region: &Region) -> Vec<Index> {
        self.pixels_in_region(region, PixelClass::Hole)
    }

    /// Valid pixels inside the region, in scan order
    pub fn valid_pixels_in_region(&self, region: &Region) -> Vec<Index> {
        self.pixels_in_region(region, PixelClass::Valid)
    }

    /// Number of hole pixels in the whole mask
    pub fn hole_count(&self) -> usize {
        self.pixels.iter().filter(|class| **class == PixelClass::Hole).count()
    }

    /// Number of valid pixels in the whole mask
    pub fn valid_count(&self) -> usize {
        self.pixels.len() - self.hole_count()
    }
}
