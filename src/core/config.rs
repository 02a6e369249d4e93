//! # Configuration
//!
//! Centralizes the planner's starting layout with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.greenhouse/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Nothing is ever written back: edits made in the planner last only for the
//! running process.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::platform::DEFAULT_PLATFORM_POSITION;
use crate::core::ranges::DEFAULT_MAX_ROW_LENGTH;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GreenhouseConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub platform: PlatformConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LayoutConfig {
    pub row1: Option<String>,
    pub row2: Option<String>,
    pub max_row_length: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlatformConfig {
    pub initial_position: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ROW1: &str = "[1-8]";
pub const DEFAULT_ROW2: &str = "[9-17]";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub row1: String,
    pub row2: String,
    pub platform_position: f64,
    pub max_row_length: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&GreenhouseConfig::default(), &CliOverrides::default())
    }
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub row1: Option<String>,
    pub row2: Option<String>,
    pub platform: Option<f64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.greenhouse/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".greenhouse").join("config.toml"))
}

/// Load config from `~/.greenhouse/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GreenhouseConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GreenhouseConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GreenhouseConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GreenhouseConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<GreenhouseConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GreenhouseConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Greenhouse Planner Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.
# Only starting values live here. Edits made in the planner are not saved.

# [layout]
# row1 = "[1-8]"                    # Or set GREENHOUSE_ROW1, or pass --row1
# row2 = "[9-17]"                   # Or set GREENHOUSE_ROW2, or pass --row2
# max_row_length = 1000             # Longest sequence a row may expand to

# [platform]
# initial_position = 50.0           # Percent along the track, 0-100
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GreenhouseConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Rows: CLI → env → config → default
    let row1 = cli
        .row1
        .clone()
        .or_else(|| std::env::var("GREENHOUSE_ROW1").ok())
        .or_else(|| config.layout.row1.clone())
        .unwrap_or_else(|| DEFAULT_ROW1.to_string());

    let row2 = cli
        .row2
        .clone()
        .or_else(|| std::env::var("GREENHOUSE_ROW2").ok())
        .or_else(|| config.layout.row2.clone())
        .unwrap_or_else(|| DEFAULT_ROW2.to_string());

    // Platform: CLI → env → config → default
    let platform_position = cli
        .platform
        .or_else(env_platform_position)
        .or(config.platform.initial_position)
        .unwrap_or(DEFAULT_PLATFORM_POSITION);

    ResolvedConfig {
        row1,
        row2,
        platform_position: if platform_position.is_nan() {
            DEFAULT_PLATFORM_POSITION
        } else {
            platform_position.clamp(0.0, 100.0)
        },
        max_row_length: config
            .layout
            .max_row_length
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_MAX_ROW_LENGTH),
    }
}

fn env_platform_position() -> Option<f64> {
    let raw = std::env::var("GREENHOUSE_PLATFORM").ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring GREENHOUSE_PLATFORM={:?}: {}", raw, e);
            None
        }
    }
}
