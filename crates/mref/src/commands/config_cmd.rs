//! `mref config` -- show the effective configuration, or write one.

use std::path::Path;

use anyhow::{Result, bail};
use mref_config::config::save_config;

use crate::cli::ConfigArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// File written by `mref config --init`.
const INIT_FILE: &str = "mref.yaml";

/// Execute the `mref config` command.
pub fn run(ctx: &RuntimeContext, args: &ConfigArgs) -> Result<()> {
    if args.init {
        return init(ctx, Path::new(INIT_FILE), args.force);
    }

    if ctx.json {
        output_json(&serde_json::json!({
            "path": ctx.config_path.as_ref().map(|p| p.display().to_string()),
            "config": ctx.config,
        }));
    } else {
        if !ctx.quiet {
            match &ctx.config_path {
                Some(p) => println!("# {}", p.display()),
                None => println!("# (no config file)"),
            }
        }
        print!("{}", serde_yaml::to_string(&ctx.config)?);
    }
    Ok(())
}

fn init(ctx: &RuntimeContext, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    save_config(path, &ctx.config)?;
    if !ctx.quiet {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
