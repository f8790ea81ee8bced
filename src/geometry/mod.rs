//! Pixel geometry primitives
//!
//! This module provides the integer coordinate, rectangle and direction
//! types shared by the mask queries and samplers.

mod index;
mod region;
mod direction;

// Re-export key types
pub use self::index::Index;
pub use self::region::{Region, patch_side};
pub use self::direction::Direction;
