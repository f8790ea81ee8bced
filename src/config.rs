//! Configuration for mask loading, sampling and overlays
//!
//! Defaults are embedded from `holekit_defaults.toml` and parsed once at
//! first use. A user file only needs the keys it changes; everything else
//! keeps the embedded default.

use std::fs;
use lazy_static::lazy_static;
use log::debug;
use crate::errors::{HoleKitError, HoleKitResult};

lazy_static! {
    // Parse the embedded defaults at first use
    static ref DEFAULT_CONFIG: HoleKitConfig = {
        let content = include_str!("../holekit_defaults.toml");
        HoleKitConfig::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse embedded holekit defaults: {}", e);
                HoleKitConfig::builtin()
            })
    };
}

/// How grayscale mask images are classified into hole and valid pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskConfig {
    /// Gray value at or above which a pixel is a hole
    pub hole_threshold: u8,
    /// Classify pixels below the threshold as hole instead
    pub invert: bool,
}

/// Attempt budgets for the random samplers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Random tries before the patch search enumerates every candidate
    pub fallback_threshold: u32,
    /// Cap for the hole / valid rejection samplers
    pub max_rejection_attempts: u32,
}

/// Visualisation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayConfig {
    /// RGB color painted over hole pixels in masked composites
    pub hole_color: [u8; 3],
}

/// Complete holekit configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleKitConfig {
    pub mask: MaskConfig,
    pub sampler: SamplerConfig,
    pub overlay: OverlayConfig,
}

impl Default for HoleKitConfig {
    fn default() -> Self {
        *DEFAULT_CONFIG
    }
}

impl Default for MaskConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.mask
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.sampler
    }
}

impl HoleKitConfig {
    // Values used if the embedded file is unreadable
    fn builtin() -> Self {
        HoleKitConfig {
            mask: MaskConfig { hole_threshold: 128, invert: false },
            sampler: SamplerConfig { fallback_threshold: 10, max_rejection_attempts: 10_000 },
            overlay: OverlayConfig { hole_color: [0, 255, 0] },
        }
    }

    /// Parse a configuration from a TOML string, on top of the built-in values
    pub fn from_str(content: &str) -> HoleKitResult<Self> {
        let mut config = HoleKitConfig::builtin();
        config.apply_toml(content)?;
        Ok(config)
    }

    /// Load a configuration file, on top of the embedded defaults
    pub fn from_file(path: &str) -> HoleKitResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(HoleKitError::IoError(e)),
        };

        let mut config = HoleKitConfig::default();
        config.apply_toml(&contents)?;
        debug!("Loaded configuration from {}: {:?}", path, config);
        Ok(config)
    }

    /// Overwrite every key present in the TOML document
    fn apply_toml(&mut self, content: &str) -> HoleKitResult<()> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(HoleKitError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        if let Some(table) = toml_value.get("mask") {
            if let Some(threshold) = read_integer(table, "mask", "hole_threshold")? {
                self.mask.hole_threshold = to_u8(threshold, "mask.hole_threshold")?;
            }
            if let Some(invert) = table.get("invert") {
                self.mask.invert = invert.as_bool()
                    .ok_or_else(|| HoleKitError::ConfigError("mask.invert must be a boolean".to_string()))?;
            }
        }

        if let Some(table) = toml_value.get("sampler") {
            if let Some(threshold) = read_integer(table, "sampler", "fallback_threshold")? {
                self.sampler.fallback_threshold = to_u32(threshold, "sampler.fallback_threshold")?;
            }
            if let Some(attempts) = read_integer(table, "sampler", "max_rejection_attempts")? {
                self.sampler.max_rejection_attempts = to_u32(attempts, "sampler.max_rejection_attempts")?;
            }
        }

        if let Some(table) = toml_value.get("overlay") {
            if let Some(color) = table.get("hole_color") {
                self.overlay.hole_color = parse_color(color)?;
            }
        }

        Ok(())
    }
}

fn read_integer(table: &toml::Value, section: &str, key: &str) -> HoleKitResult<Option<i64>> {
    match table.get(key) {
        None => Ok(None),
        Some(value) => value.as_integer()
            .map(Some)
            .ok_or_else(|| HoleKitError::ConfigError(format!("{}.{} must be an integer", section, key))),
    }
}

fn to_u8(value: i64, key: &str) -> HoleKitResult<u8> {
    u8::try_from(value)
        .map_err(|_| HoleKitError::ConfigError(format!("{} must be between 0 and 255, got {}", key, value)))
}

fn to_u32(value: i64, key: &str) -> HoleKitResult<u32> {
    u32::try_from(value)
        .map_err(|_| HoleKitError::ConfigError(format!("{} must be a non-negative 32-bit integer, got {}", key, value)))
}

fn parse_color(value: &toml::Value) -> HoleKitResult<[u8; 3]> {
    let channels = value.as_array()
        .filter(|array| array.len() == 3)
        .ok_or_else(|| HoleKitError::ConfigError("overlay.hole_color must be an array of 3 integers".to_string()))?;

    let mut color = [0u8; 3];
    for (slot, channel) in color.iter_mut().zip(channels) {
        let channel = channel.as_integer()
            .ok_or_else(|| HoleKitError::ConfigError("overlay.hole_color entries must be integers".to_string()))?;
        *slot = to_u8(channel, "overlay.hole_color")?;
    }
    Ok(color)
}
