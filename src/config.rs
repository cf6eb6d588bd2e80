//! Run configuration.
//!
//! A run is described by an immutable [`ShrinkConfig`] built once at startup
//! from three layers, highest priority first:
//!
//! 1. Command-line flags (`-s`, `-w`)
//! 2. An optional TOML file passed with `--config`
//! 3. Stock defaults
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! target_size_kb = 1000   # JPEG size budget per image, in KiB
//! max_width = 1920        # Images wider than this are scaled down
//! ```
//!
//! Unknown keys are rejected to catch typos early. Zero values are rejected
//! by [`ShrinkConfig::validate`]: a zero budget can never be met and a zero
//! width has no meaningful resize.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_TARGET_SIZE_KB: u32 = 1000;
pub const DEFAULT_MAX_WIDTH: u32 = 1920;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings loadable from a `--config` TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// JPEG size budget per image, in KiB.
    pub target_size_kb: u32,
    /// Maximum output width in pixels.
    pub max_width: u32,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            target_size_kb: DEFAULT_TARGET_SIZE_KB,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

/// Values given explicitly on the command line. `None` falls through to the
/// config file, then the stock default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub target_size_kb: Option<u32>,
    pub max_width: Option<u32>,
}

/// Fully resolved, validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShrinkConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub target_size_kb: u32,
    pub max_width: u32,
}

impl ShrinkConfig {
    /// Layer CLI overrides on top of file values and validate the result.
    pub fn resolve(
        input_dir: PathBuf,
        output_dir: PathBuf,
        file: FileConfig,
        overrides: Overrides,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            input_dir,
            output_dir,
            target_size_kb: overrides.target_size_kb.unwrap_or(file.target_size_kb),
            max_width: overrides.max_width.unwrap_or(file.max_width),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_size_kb == 0 {
            return Err(ConfigError::Validation(
                "target_size_kb must be greater than 0".into(),
            ));
        }
        if self.max_width == 0 {
            return Err(ConfigError::Validation(
                "max_width must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// JPEG budget in bytes (`target_size_kb * 1024`).
    pub fn budget_bytes(&self) -> u64 {
        u64::from(self.target_size_kb) * 1024
    }
}

/// Load a config file. Missing keys take stock defaults.
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `--print-config` flag.
pub fn stock_config_toml() -> &'static str {
    r##"# imgshrink configuration
# ========================
# Pass with: imgshrink -i <input> -o <output> --config imgshrink.toml
# Command-line flags (-s, -w) override values set here.

# JPEG size budget per image, in KiB. Quality is lowered from 80 in
# steps of 5 until the encoded file fits. If even quality 5 does not
# fit, the quality 5 result is written anyway.
target_size_kb = 1000

# Images wider than this many pixels are scaled down to exactly this
# width, keeping their aspect ratio. Narrower images keep their size.
max_width = 1920
"##
}
