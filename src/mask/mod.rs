//! Hole masks
//!
//! This module defines the valid/hole classification grid and the
//! predicates the traversal and sampling routines are built on.

mod pixel_class;
mod grid;
mod loader;

pub use pixel_class::PixelClass;
pub use grid::Mask;
