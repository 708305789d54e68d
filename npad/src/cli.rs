//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;
use npad_core::DEFAULT_ROUGHNESS;

use crate::config::NpadConfig;

/// Generates tileable NPad noise and prints it as a plain PGM image.
///
/// Width and height must be divisible by 4.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "npad", version)]
pub struct Args {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels, defaults to the width.
    pub height: Option<usize>,
    /// Jitter scale for the interior midpoints.
    #[arg(short, long)]
    pub roughness: Option<f64>,
    /// Blend in lower resolution octaves, down to 4x4 when possible.
    #[arg(long)]
    pub octaves: bool,
    /// Seed for reproducible output. Seeds from the clock when omitted.
    #[arg(short, long)]
    pub seed: Option<u32>,
    /// Generate in single precision.
    #[arg(long)]
    pub single_precision: bool,
    /// Write the image here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Config file, defaults to `npad.json5` when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Effective settings after merging flags, config and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Grid width.
    pub width: usize,
    /// Grid height.
    pub height: usize,
    /// Jitter scale.
    pub roughness: f64,
    /// Whether octaves are blended in.
    pub octaves: bool,
    /// Generator seed, `None` seeds from the clock.
    pub seed: Option<u32>,
    /// Generate `f32` instead of `f64` samples.
    pub single_precision: bool,
}

impl Settings {
    /// Flags win over the config file, the config file wins over defaults.
    #[must_use]
    pub fn resolve(args: &Args, config: &NpadConfig) -> Self {
        Self {
            width: args.width,
            height: args.height.unwrap_or(args.width),
            roughness: args
                .roughness
                .or(config.roughness)
                .unwrap_or(DEFAULT_ROUGHNESS),
            octaves: args.octaves || config.octaves.unwrap_or(false),
            seed: args.seed.or(config.seed),
            single_precision: args.single_precision || config.single_precision.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::iter;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(iter::once("npad").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn height_defaults_to_width() {
        let settings = Settings::resolve(&parse(&["64"]), &NpadConfig::default());
        assert_eq!(settings.width, 64);
        assert_eq!(settings.height, 64);
        assert!((settings.roughness - DEFAULT_ROUGHNESS).abs() < f64::EPSILON);
        assert!(!settings.octaves);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn flags_override_config() {
        let config = NpadConfig {
            roughness: Some(0.1),
            octaves: Some(true),
            seed: Some(7),
            single_precision: None,
        };
        let settings = Settings::resolve(&parse(&["32", "16", "-r", "0.9", "-s", "3"]), &config);
        assert_eq!((settings.width, settings.height), (32, 16));
        assert!((settings.roughness - 0.9).abs() < f64::EPSILON);
        assert!(settings.octaves);
        assert_eq!(settings.seed, Some(3));
        assert!(!settings.single_precision);
    }

    #[test]
    fn config_fills_missing_flags() {
        let config = NpadConfig {
            roughness: Some(0.2),
            octaves: None,
            seed: Some(11),
            single_precision: Some(true),
        };
        let settings = Settings::resolve(&parse(&["8", "--octaves"]), &config);
        assert!((settings.roughness - 0.2).abs() < f64::EPSILON);
        assert!(settings.octaves);
        assert_eq!(settings.seed, Some(11));
        assert!(settings.single_precision);
    }

    #[test]
    fn width_is_required() {
        assert!(Args::try_parse_from(["npad"]).is_err());
        assert!(Args::try_parse_from(["npad", "wide"]).is_err());
    }
}
