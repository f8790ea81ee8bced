//! Patch sampling command
//!
//! Draws one or more random patches from a mask with a seeded generator,
//! so a run can be repeated exactly by passing the same --seed.

use clap::ArgMatches;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::api::{HoleKit, SampleMode, SampleRequest};
use crate::commands::args::{parse_optional, radius, required_string, search_region};
use crate::commands::command_traits::Command;
use crate::errors::{HoleKitError, HoleKitResult};
use crate::geometry::Region;
use crate::utils::progress::ProgressTracker;

/// Command for drawing random patches
pub struct SampleCommand<'a> {
    /// Path to the mask image
    input_file: String,
    /// What to draw
    request: SampleRequest,
    /// Number of patches
    count: u32,
    /// Generator seed
    seed: u64,
    /// Library facade
    kit: &'a HoleKit,
}

impl<'a> SampleCommand<'a> {
    /// Create a new sample command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade
    ///
    /// # Returns
    /// A new SampleCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a HoleKit) -> HoleKitResult<Self> {
        let input_file = required_string(args, "input", "input mask file")?;

        let mode = parse_optional::<SampleMode>(args, "sample")?
            .ok_or_else(|| HoleKitError::GenericError("Missing sample mode".to_string()))?;

        let request = SampleRequest {
            mode,
            radius: radius(args)?,
            search: search_region(args)?,
            attempts: parse_optional::<u32>(args, "attempts")?,
        };

        if mode != SampleMode::Patch && (request.search.is_some() || request.attempts.is_some()) {
            warn!("--search and --attempts only apply to --sample patch; ignoring them");
        }

        let count = parse_optional::<u32>(args, "count")?.unwrap_or(1);

        // Without --seed, pick one and report it so the run can be repeated
        let seed = match parse_optional::<u64>(args, "seed")? {
            Some(seed) => seed,
            None => rand::random::<u64>(),
        };

        Ok(SampleCommand {
            input_file,
            request,
            count,
            seed,
            kit,
        })
    }
}

impl<'a> Command for SampleCommand<'a> {
    fn execute(&self) -> HoleKitResult<()> {
        info!("Sampling {} {} patch(es) of radius {} from {} (seed {})",
              self.count, self.request.mode, self.request.radius, self.input_file, self.seed);

        let mask = self.kit.load_mask(&self.input_file)?;
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let progress = if self.count > 1 {
            ProgressTracker::new(self.count as u64, "Sampling patches")
        } else {
            ProgressTracker::hidden()
        };

        let mut found: Vec<Region> = Vec::new();
        let mut last_failure = None;

        for _ in 0..self.count {
            match self.kit.sample(&mask, &self.request, &mut rng) {
                Ok(region) => found.push(region),
                Err(HoleKitError::NoCandidate { reason }) => {
                    warn!("Sampling failed: {}", reason);
                    last_failure = Some(HoleKitError::NoCandidate { reason });
                }
                Err(e) => return Err(e),
            }
            progress.increment(1);
        }
        progress.finish("Sampling complete");

        for region in &found {
            println!("{} {}", self.request.mode, region);
        }

        info!("Drew {} of {} requested patches", found.len(), self.count);

        match (found.is_empty(), last_failure) {
            (true, Some(failure)) => Err(failure),
            _ => Ok(()),
        }
    }
}
