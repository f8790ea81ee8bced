pub mod errors;
pub mod config;
pub mod geometry;
pub mod mask;
pub mod operations;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{HoleKit, SampleMode, SampleRequest};

pub use errors::{HoleKitError, HoleKitResult};
pub use config::{HoleKitConfig, MaskConfig, SamplerConfig, OverlayConfig};
pub use geometry::{Direction, Index, Region};
pub use mask::{Mask, PixelClass};
pub use operations::{compute_hole_bounding_box, find_pixel_across_hole, RegionSampler};
