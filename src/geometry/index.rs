//! Integer pixel coordinate

use std::fmt;
use std::str::FromStr;

/// A pixel position on the image grid
///
/// Rows grow downward and columns grow to the right, with (0,0) at the
/// top-left corner. Coordinates are signed so that positions just outside
/// the image can be formed and then rejected by containment checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Index {
    /// Row (distance from the top edge)
    pub row: i64,
    /// Column (distance from the left edge)
    pub col: i64,
}

impl Index {
    /// Create a new index
    pub fn new(row: i64, col: i64) -> Self {
        Index { row, col }
    }

    /// Return this index shifted by the given row and column offsets
    ///
    /// Coordinates saturate at the `i64` limits.
    pub fn offset(&self, d_row: i64, d_col: i64) -> Self {
        Index::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Index {
    type Err = String;

    /// Parse an index from a string (format: "row,col")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err("Index must have 2 comma-separated values (row,col)".to_string());
        }

        let row = parts[0].trim().parse::<i64>()
            .map_err(|_| format!("Invalid row value: {}", parts[0]))?;
        let col = parts[1].trim().parse::<i64>()
            .map_err(|_| format!("Invalid column value: {}", parts[1]))?;

        Ok(Index::new(row, col))
    }
}
