//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds the effective configuration (file, env and
//! flags merged) and the global output flags.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use mref_config::config::{MrefConfig, load_config};
use mref_config::discover::find_config_file;
use mref_core::Rewriter;
use tracing::debug;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Config file that was loaded, if any.
    pub config_path: Option<PathBuf>,

    /// Effective configuration with command-line overrides applied.
    pub config: MrefConfig,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Priority for each setting: flag > `MREF_*` env > config file > default.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let config_path = match &global.config {
            Some(p) => Some(p.clone()),
            None => find_config_file(&env::current_dir()?),
        };
        debug!(?config_path, "resolved config file");

        let mut config = load_config(config_path.as_deref()).with_context(|| match &config_path {
            Some(p) => format!("loading {}", p.display()),
            None => "loading configuration".to_string(),
        })?;
        apply_overrides(&mut config, global);

        Ok(Self {
            config_path,
            config,
            json: global.json,
            quiet: global.quiet,
        })
    }

    /// Build a rewriter from the effective configuration.
    pub fn rewriter(&self) -> Result<Rewriter> {
        Ok(Rewriter::new(self.config.options())?)
    }
}

/// Apply command-line flags on top of the loaded configuration.
fn apply_overrides(config: &mut MrefConfig, global: &GlobalArgs) {
    if let Some(array) = &global.array {
        config.array = array.clone();
    }
    if global.strict {
        config.strict = true;
    } else if global.lenient {
        config.strict = false;
    }
}
