//! Custom error types for mask queries and patch sampling

use std::fmt;
use std::io;

use crate::geometry::Index;

/// Error types produced by holekit operations
#[derive(Debug)]
pub enum HoleKitError {
    /// I/O error
    IoError(io::Error),
    /// Image decoding or encoding failed
    ImageError(image::ImageError),
    /// Hole traversal started from a pixel that is not valid
    InvalidStart(Index),
    /// Hole traversal walked off the mask before leaving the hole
    TraversalOutOfBounds {
        /// Pixel the traversal started from
        start: Index,
        /// Last in-bounds pixel visited
        last: Index,
    },
    /// The mask contains no hole pixels
    NoHole,
    /// No patch satisfies the request, or sampling ran out of attempts
    NoCandidate {
        /// What was being searched for
        reason: String,
    },
    /// Direction vector has zero length or non-finite components
    InvalidDirection,
    /// Image and mask sizes disagree
    DimensionMismatch {
        /// Size of the mask (width, height)
        expected: (u32, u32),
        /// Size of the image (width, height)
        found: (u32, u32),
    },
    /// Configuration could not be parsed
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for HoleKitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoleKitError::IoError(e) => write!(f, "I/O error: {}", e),
            HoleKitError::ImageError(e) => write!(f, "Image error: {}", e),
            HoleKitError::InvalidStart(index) => {
                write!(f, "Can only follow a valid pixel across a hole, {} is not valid", index)
            }
            HoleKitError::TraversalOutOfBounds { start, last } => write!(
                f,
                "Hole starting next to {} runs off the mask after {}", start, last
            ),
            HoleKitError::NoHole => write!(f, "Mask has no hole pixels"),
            HoleKitError::NoCandidate { reason } => write!(f, "No candidate region: {}", reason),
            HoleKitError::InvalidDirection => write!(f, "Direction vector must be finite and non-zero"),
            HoleKitError::DimensionMismatch { expected, found } => write!(
                f,
                "Image is {}x{} but mask is {}x{}", found.0, found.1, expected.0, expected.1
            ),
            HoleKitError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            HoleKitError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for HoleKitError {}

impl From<io::Error> for HoleKitError {
    fn from(error: io::Error) -> Self {
        HoleKitError::IoError(error)
    }
}

impl From<image::ImageError> for HoleKitError {
    fn from(error: image::ImageError) -> Self {
        HoleKitError::ImageError(error)
    }
}

/// Result type for holekit operations
pub type HoleKitResult<T> = Result<T, HoleKitError>;

impl From<String> for HoleKitError {
    fn from(msg: String) -> Self {
        HoleKitError::GenericError(msg)
    }
}
