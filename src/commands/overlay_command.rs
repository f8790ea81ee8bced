//! Mask visualisation command

use clap::ArgMatches;
use log::info;

use crate::api::HoleKit;
use crate::commands::args::required_string;
use crate::commands::command_traits::Command;
use crate::errors::HoleKitResult;

/// Command for writing a mask overlay or masked composite
pub struct OverlayCommand<'a> {
    /// Path to the mask image
    input_file: String,
    /// Path of the image to write
    output_file: String,
    /// Optional source image to composite
    image_file: Option<String>,
    /// Library facade
    kit: &'a HoleKit,
}

impl<'a> OverlayCommand<'a> {
    /// Create a new overlay command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new OverlayCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a HoleKit) -> HoleKitResult<Self> {
        Ok(OverlayCommand {
            input_file: required_string(args, "input", "input mask file")?,
            output_file: required_string(args, "overlay", "output path for --overlay")?,
            image_file: args.get_one::<String>("image").cloned(),
            kit,
        })
    }
}

impl<'a> Command for OverlayCommand<'a> {
    fn execute(&self) -> HoleKitResult<()> {
        match &self.image_file {
            Some(image) => info!("Compositing {} with mask {}", image, self.input_file),
            None => info!("Rendering overlay of mask {}", self.input_file),
        }

        let mask = self.kit.load_mask(&self.input_file)?;
        self.kit.write_overlay(&mask, &self.output_file, self.image_file.as_deref())?;

        println!("Wrote {}", self.output_file);
        Ok(())
    }
}
