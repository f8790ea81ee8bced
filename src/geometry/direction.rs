//! Direction vectors and rasterised stepping

use std::fmt;
use std::str::FromStr;

use super::index::Index;
use crate::errors::{HoleKitError, HoleKitResult};

/// A 2D direction on the image plane
///
/// `dx` advances along columns and `dy` along rows. The vector does not
/// need to be normalized, but its sign matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    /// Column component
    pub dx: f64,
    /// Row component
    pub dy: f64,
}

impl Direction {
    /// Create a new direction
    pub fn new(dx: f64, dy: f64) -> Self {
        Direction { dx, dy }
    }

    /// The same line, pointing the other way
    pub fn negated(&self) -> Self {
        Direction::new(-self.dx, -self.dy)
    }

    /// Euclidean length of the vector
    pub fn length(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Grid offset (row, col) of one rasterised step along this direction
    ///
    /// The vector is normalized and each component rounded half away from
    /// zero, so the step always lands on one of the 8 neighbours.
    pub fn unit_offset(&self) -> HoleKitResult<(i64, i64)> {
        let scale = self.dx.abs().max(self.dy.abs());
        if !self.dx.is_finite() || !self.dy.is_finite() || scale == 0.0 {
            return Err(HoleKitError::InvalidDirection);
        }

        // Scaling to a largest component of 1 keeps hypot finite
        let dx = self.dx / scale;
        let dy = self.dy / scale;
        let length = Direction::new(dx, dy).length();

        let d_col = (dx / length).round() as i64;
        let d_row = (dy / length).round() as i64;
        Ok((d_row, d_col))
    }

    /// The pixel one step from `index` along this direction
    pub fn step_from(&self, index: Index) -> HoleKitResult<Index> {
        let (d_row, d_col) = self.unit_offset()?;
        Ok(index.offset(d_row, d_col))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

impl FromStr for Direction {
    type Err = String;

    /// Parse a direction from a string (format: "dx,dy")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err("Direction must have 2 comma-separated values (dx,dy)".to_string());
        }

        let dx = parts[0].trim().parse::<f64>()
            .map_err(|_| "Invalid dx value".to_string())?;
        let dy = parts[1].trim().parse::<f64>()
            .map_err(|_| "Invalid dy value".to_string())?;

        Ok(Direction::new(dx, dy))
    }
}
