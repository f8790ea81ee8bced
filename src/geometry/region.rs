//! Rectangular pixel region
//!
//! A Region is an axis-aligned rectangle defined by its top-left corner
//! and its size in pixels. Patches, search windows, bounding boxes and the
//! full extent of a mask are all expressed as regions.

use std::fmt;
use std::str::FromStr;

use super::index::Index;

/// Rectangular area of the pixel grid
///
/// `width` runs along columns and `height` along rows. A region with zero
/// area is the null region, used where "no region" must be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    /// Top-left pixel of the region
    pub corner: Index,

    /// Number of columns covered
    pub width: u32,

    /// Number of rows covered
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `corner` - Top-left pixel of the region
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(corner: Index, width: u32, height: u32) -> Self {
        Region { corner, width, height }
    }

    /// Create a region from its corner row/column and size
    pub fn from_parts(row: i64, col: i64, width: u32, height: u32) -> Self {
        Region::new(Index::new(row, col), width, height)
    }

    /// The null region (0x0 at the origin)
    pub fn null() -> Self {
        Region::default()
    }

    /// Whether the region covers no pixels
    pub fn is_null(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Square region of side `2 * radius + 1` centred on `center`
    ///
    /// The corner may have negative coordinates when the center is closer
    /// than `radius` to the top or left edge. Returns None when the side
    /// does not fit in a `u32`.
    pub fn around_pixel(center: Index, radius: u32) -> Option<Self> {
        let side = u32::try_from(patch_side(radius)).ok()?;
        Some(Region::new(center.offset(-(radius as i64), -(radius as i64)), side, side))
    }

    /// Square region of side `2 * radius + 1` whose top-left pixel is `corner`
    pub fn square_at(corner: Index, radius: u32) -> Option<Self> {
        let side = u32::try_from(patch_side(radius)).ok()?;
        Some(Region::new(corner, side, side))
    }

    /// First row below the region (exclusive), clamped at `i64::MAX`
    pub fn end_row(&self) -> i64 {
        self.corner.row.saturating_add(self.height as i64)
    }

    /// First column right of the region (exclusive), clamped at `i64::MAX`
    pub fn end_col(&self) -> i64 {
        self.corner.col.saturating_add(self.width as i64)
    }

    /// Whether the far edges can be represented without clamping
    pub fn has_exact_end(&self) -> bool {
        self.corner.row.checked_add(self.height as i64).is_some() &&
            self.corner.col.checked_add(self.width as i64).is_some()
    }

    /// Number of pixels in the region
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if a pixel lies inside this region
    pub fn contains_index(&self, index: Index) -> bool {
        index.row >= self.corner.row && index.row < self.end_row() &&
            index.col >= self.corner.col && index.col < self.end_col()
    }

    /// Check if another region lies entirely inside this one
    ///
    /// The null region is never contained.
    pub fn contains_region(&self, other: &Region) -> bool {
        !other.is_null() &&
            other.corner.row >= self.corner.row && other.end_row() <= self.end_row() &&
            other.corner.col >= self.corner.col && other.end_col() <= self.end_col()
    }

    /// Overlap of two regions, or None if they do not overlap
    pub fn intersection(&self, other: &Region) -> Option<Region> {
        let row = self.corner.row.max(other.corner.row);
        let col = self.corner.col.max(other.corner.col);
        let end_row = self.end_row().min(other.end_row());
        let end_col = self.end_col().min(other.end_col());

        if end_row <= row || end_col <= col {
            return None;
        }

        Some(Region::from_parts(row, col, (end_col - col) as u32, (end_row - row) as u32))
    }

    /// All pixels of the region in row-major scan order
    pub fn indices(&self) -> impl Iterator<Item = Index> {
        let corner = self.corner;
        let width = self.width as i64;
        let height = self.height as i64;
        (0..height).flat_map(move |r| (0..width).map(move |c| corner.offset(r, c)))
    }
}

/// Side length of a square patch with the given radius
pub fn patch_side(radius: u32) -> u64 {
    radius as u64 * 2 + 1
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{} {}x{}]", self.corner.row, self.corner.col, self.width, self.height)
    }
}

impl FromStr for Region {
    type Err = String;

    /// Parse a region from a string (format: "row,col,width,height")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err("Region must have 4 comma-separated values (row,col,width,height)".to_string());
        }

        let row = parts[0].trim().parse::<i64>()
            .map_err(|_| "Invalid row value".to_string())?;
        let col = parts[1].trim().parse::<i64>()
            .map_err(|_| "Invalid column value".to_string())?;
        let width = parts[2].trim().parse::<u32>()
            .map_err(|_| "Invalid width value".to_string())?;
        let height = parts[3].trim().parse::<u32>()
            .map_err(|_| "Invalid height value".to_string())?;

        Ok(Region::from_parts(row, col, width, height))
    }
}
