//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod bbox_command;
pub mod cross_command;
pub mod sample_command;
pub mod enumerate_command;
pub mod overlay_command;
mod args;

pub use command_traits::{Command, CommandFactory};
pub use bbox_command::BoundingBoxCommand;
pub use cross_command::CrossCommand;
pub use sample_command::SampleCommand;
pub use enumerate_command::EnumerateCommand;
pub use overlay_command::OverlayCommand;

use clap::ArgMatches;
use crate::api::HoleKit;
use crate::errors::HoleKitResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct HoleKitCommandFactory;

impl HoleKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        HoleKitCommandFactory
    }
}

impl Default for HoleKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for HoleKitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a HoleKit) -> HoleKitResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_one::<String>("cross").is_some() {
            Ok(Box::new(CrossCommand::new(args, kit)?))
        } else if args.get_one::<String>("sample").is_some() {
            Ok(Box::new(SampleCommand::new(args, kit)?))
        } else if args.get_flag("enumerate") {
            Ok(Box::new(EnumerateCommand::new(args, kit)?))
        } else if args.get_one::<String>("overlay").is_some() {
            Ok(Box::new(OverlayCommand::new(args, kit)?))
        } else {
            // Default to the bounding box report
            Ok(Box::new(BoundingBoxCommand::new(args, kit)?))
        }
    }
}
