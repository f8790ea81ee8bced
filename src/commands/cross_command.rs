//! Hole crossing command
//!
//! Follows a direction from a valid boundary pixel to the first pixel on
//! the far side of the hole.

use clap::ArgMatches;
use log::info;

use crate::api::HoleKit;
use crate::commands::args::{parse_optional, required_string};
use crate::commands::command_traits::Command;
use crate::errors::{HoleKitError, HoleKitResult};
use crate::geometry::{Direction, Index};

/// Command for crossing a hole along a direction
pub struct CrossCommand<'a> {
    /// Path to the mask image
    input_file: String,
    /// Valid pixel to start from
    start: Index,
    /// Direction to follow
    direction: Direction,
    /// Library facade
    kit: &'a HoleKit,
}

impl<'a> CrossCommand<'a> {
    /// Create a new cross command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new CrossCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a HoleKit) -> HoleKitResult<Self> {
        let input_file = required_string(args, "input", "input mask file")?;

        let start = parse_optional::<Index>(args, "cross")?
            .ok_or_else(|| HoleKitError::GenericError("Missing start pixel for --cross".to_string()))?;

        let direction = parse_optional::<Direction>(args, "direction")?
            .ok_or_else(|| HoleKitError::GenericError(
                "Missing direction. Use --direction DX,DY together with --cross".to_string()))?;

        Ok(CrossCommand {
            input_file,
            start,
            direction,
            kit,
        })
    }
}

impl<'a> Command for CrossCommand<'a> {
    fn execute(&self) -> HoleKitResult<()> {
        info!("Crossing hole in {} from {} along {}", self.input_file, self.start, self.direction);

        let mask = self.kit.load_mask(&self.input_file)?;
        let exit = self.kit.cross_hole(&mask, self.start, self.direction)?;

        println!("Pixel across hole: ({},{})", exit.row, exit.col);
        Ok(())
    }
}
