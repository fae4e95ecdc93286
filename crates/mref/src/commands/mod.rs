//! Command handlers, one module per subcommand.

pub mod completion;
pub mod config_cmd;
pub mod normalize;
pub mod rewrite;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::InputArgs;
use crate::context::RuntimeContext;

/// Resolve the formula to work on: inline argument, then `--file`
/// (`-` reads stdin), then the configured formula.
pub(crate) fn read_formula(ctx: &RuntimeContext, args: &InputArgs) -> Result<String> {
    if let Some(formula) = &args.formula {
        return Ok(formula.clone());
    }
    match args.file.as_deref() {
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading formula from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading formula from {}", path.display())),
        None => Ok(ctx.config.formula.clone()),
    }
}
