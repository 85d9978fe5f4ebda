/// Runtime configuration resolved from CLI flags and defaults.
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::color::ColorMode;
use crate::gradient::{GenerationRequest, GradientKind};

pub const DEFAULT_COUNT: usize = 24;
pub const DEFAULT_COPIED_MS: u64 = 2_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub count: NonZeroUsize,
    pub kind: GradientKind,
    pub mode: ColorMode,
    /// How long the copied marker stays before it is reset.
    pub copied_reset: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: NonZeroUsize::new(DEFAULT_COUNT).unwrap_or(NonZeroUsize::MIN),
            kind: GradientKind::default(),
            mode: ColorMode::default(),
            copied_reset: Duration::from_millis(DEFAULT_COPIED_MS),
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            count: cli.settings.count.unwrap_or(defaults.count),
            kind: cli.settings.kind.unwrap_or(defaults.kind),
            mode: cli.settings.mode.unwrap_or(defaults.mode),
            copied_reset: cli
                .copied_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.copied_reset),
        }
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            count: self.count,
            kind: self.kind,
            mode: self.mode,
        }
    }
}

/// Returns the log file path inside the user's cache directory.
/// Falls back to `./gradr.log` when no cache dir is found.
pub fn default_log_path() -> PathBuf {
    if let Some(cache_dir) = dirs::cache_dir() {
        let gradr_dir = cache_dir.join("gradr");
        std::fs::create_dir_all(&gradr_dir).ok();
        gradr_dir.join("gradr.log")
    } else {
        PathBuf::from("gradr.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["gradr"]).unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config, Config::default());
        assert_eq!(config.count.get(), DEFAULT_COUNT);
        assert_eq!(config.copied_reset, Duration::from_millis(2_000));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "gradr",
            "--count",
            "7",
            "--kind",
            "repeating",
            "--mode",
            "hex",
            "--copied-ms",
            "500",
        ])
        .unwrap();
        let config = Config::from_cli(&cli);
        assert_eq!(config.count.get(), 7);
        assert_eq!(config.kind, GradientKind::Repeating);
        assert_eq!(config.mode, ColorMode::Hex);
        assert_eq!(config.copied_reset, Duration::from_millis(500));
        let request = config.request();
        assert_eq!(request.count.get(), 7);
        assert_eq!(request.kind, GradientKind::Repeating);
    }

    #[test]
    fn log_path_is_named_after_the_app() {
        assert!(default_log_path().ends_with("gradr.log"));
    }
}
