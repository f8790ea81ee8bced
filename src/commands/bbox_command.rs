//! Hole bounding box command
//!
//! Reports the tight rectangle enclosing the hole of a mask image.

use clap::ArgMatches;
use log::info;

use crate::api::HoleKit;
use crate::commands::args::required_string;
use crate::commands::command_traits::Command;
use crate::errors::HoleKitResult;

/// Command for reporting the hole bounding box
pub struct BoundingBoxCommand<'a> {
    /// Path to the mask image
    input_file: String,
    /// Library facade
    kit: &'a HoleKit,
}

impl<'a> BoundingBoxCommand<'a> {
    /// Create a new bounding box command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new BoundingBoxCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a HoleKit) -> HoleKitResult<Self> {
        let input_file = required_string(args, "input", "input mask file")?;
        Ok(BoundingBoxCommand { input_file, kit })
    }
}

impl<'a> Command for BoundingBoxCommand<'a> {
    fn execute(&self) -> HoleKitResult<()> {
        info!("Computing hole bounding box of {}", self.input_file);

        let mask = self.kit.load_mask(&self.input_file)?;
        let bbox = self.kit.hole_bounding_box(&mask)?;

        println!("Hole pixels: {} of {}", mask.hole_count(), mask.full_extent().area());
        println!("Bounding box: corner ({},{}) size {}x{}",
                 bbox.corner.row, bbox.corner.col, bbox.width, bbox.height);
        Ok(())
    }
}
