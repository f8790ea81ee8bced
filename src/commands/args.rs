//! Shared argument parsing for commands

use std::str::FromStr;
use clap::ArgMatches;

use crate::errors::{HoleKitError, HoleKitResult};
use crate::geometry::Region;

/// Required string argument
pub(crate) fn required_string(args: &ArgMatches, name: &str, what: &str) -> HoleKitResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| HoleKitError::GenericError(format!("Missing {}", what)))
}

/// Optional argument parsed with `FromStr`
pub(crate) fn parse_optional<T>(args: &ArgMatches, name: &str) -> HoleKitResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match args.get_one::<String>(name) {
        None => Ok(None),
        Some(value) => value.parse::<T>()
            .map(Some)
            .map_err(|e| HoleKitError::GenericError(format!("Invalid --{} '{}': {}", name, value, e))),
    }
}

/// Patch radius, defaulting to 0
pub(crate) fn radius(args: &ArgMatches) -> HoleKitResult<u32> {
    Ok(parse_optional::<u32>(args, "radius")?.unwrap_or(0))
}

/// Optional search region
pub(crate) fn search_region(args: &ArgMatches) -> HoleKitResult<Option<Region>> {
    parse_optional::<Region>(args, "search")
}
