//! Configuration types and loading for mref.
//!
//! The main entry point is [`MrefConfig`], loaded with [`load_config`] and
//! written with [`save_config`].

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml, Yaml};
use mref_core::{DEFAULT_ARRAY, DEFAULT_FORMULA, Options};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Prefix of the environment variables that override file settings.
pub const ENV_PREFIX: &str = "MREF_";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider failed or a value had the wrong type.
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    /// The file extension is neither YAML nor TOML.
    #[error("unsupported config file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The config file could not be written.
    #[error("failed to write config file: {0}")]
    Write(#[from] std::io::Error),

    /// The config could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Effective mref settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrefConfig {
    /// Formula rewritten when none is given on the command line.
    #[serde(default = "default_formula")]
    pub formula: String,

    /// Array name used in the access expressions.
    #[serde(default = "default_array")]
    pub array: String,

    /// Reject characters outside the formula alphabet.
    #[serde(default)]
    pub strict: bool,
}

impl Default for MrefConfig {
    fn default() -> Self {
        Self {
            formula: default_formula(),
            array: default_array(),
            strict: false,
        }
    }
}

fn default_formula() -> String {
    DEFAULT_FORMULA.to_string()
}

fn default_array() -> String {
    DEFAULT_ARRAY.to_string()
}

impl MrefConfig {
    /// Rewriter options carried by this config.
    pub fn options(&self) -> Options {
        Options {
            array: self.array.clone(),
            strict: self.strict,
        }
    }
}

/// Build the layered provider: defaults, then `path` (if any), then the
/// `MREF_*` environment.
///
/// A `path` that does not exist contributes nothing.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedFormat`] if `path` has an extension
/// other than `yaml`, `yml` or `toml`.
pub fn figment(path: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(MrefConfig::default()));

    if let Some(path) = path {
        figment = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => figment.merge(Yaml::file(path)),
            Some("toml") => figment.merge(Toml::file(path)),
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
    }

    Ok(figment.merge(Env::prefixed(ENV_PREFIX).only(&["formula", "array", "strict"])))
}

/// Load the effective configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Load`] if the file is malformed or a value has
/// the wrong type.
pub fn load_config(path: Option<&Path>) -> Result<MrefConfig> {
    debug!(?path, "loading configuration");
    let config: MrefConfig = figment(path)?.extract()?;
    Ok(config)
}

/// Write `config` as YAML to `path`, creating parent directories.
pub fn save_config(path: &Path, config: &MrefConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
