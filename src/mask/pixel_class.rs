//! Per-pixel mask classification

use std::fmt;

/// Classification of a single mask pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelClass {
    /// Known image content
    Valid,
    /// Missing content to be synthesized
    Hole,
}

impl PixelClass {
    /// The other classification
    pub fn opposite(self) -> Self {
        match self {
            PixelClass::Valid => PixelClass::Hole,
            PixelClass::Hole => PixelClass::Valid,
        }
    }
}

impl fmt::Display for PixelClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelClass::Valid => write!(f, "valid"),
            PixelClass::Hole => write!(f, "hole"),
        }
    }
}
