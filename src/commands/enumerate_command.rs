//! Valid patch enumeration command

use clap::ArgMatches;
use log::info;

use crate::api::HoleKit;
use crate::commands::args::{radius, required_string, search_region};
use crate::commands::command_traits::Command;
use crate::errors::HoleKitResult;
use crate::geometry::Region;

/// Command for listing every fully valid patch
pub struct EnumerateCommand<'a> {
    /// Path to the mask image
    input_file: String,
    /// Patch radius
    radius: u32,
    /// Region to search, whole mask if None
    search: Option<Region>,
    /// Library facade
    kit: &'a HoleKit,
}

impl<'a> EnumerateCommand<'a> {
    /// Create a new enumerate command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new EnumerateCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a HoleKit) -> HoleKitResult<Self> {
        Ok(EnumerateCommand {
            input_file: required_string(args, "input", "input mask file")?,
            radius: radius(args)?,
            search: search_region(args)?,
            kit,
        })
    }
}

impl<'a> Command for EnumerateCommand<'a> {
    fn execute(&self) -> HoleKitResult<()> {
        info!("Enumerating valid patches of radius {} in {}", self.radius, self.input_file);

        let mask = self.kit.load_mask(&self.input_file)?;
        let regions = self.kit.enumerate(&mask, self.search, self.radius)?;

        for region in &regions {
            println!("{}", region);
        }
        println!("{} fully valid patches", regions.len());
        Ok(())
    }
}
