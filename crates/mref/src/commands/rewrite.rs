//! `mref rewrite` -- the full formula rewrite.

use anyhow::Result;

use crate::cli::InputArgs;
use crate::commands::read_formula;
use crate::context::RuntimeContext;
use crate::output::{output_json, print_line};

/// Execute the `mref rewrite` command (also the no-subcommand default).
pub fn run(ctx: &RuntimeContext, args: &InputArgs) -> Result<()> {
    let formula = read_formula(ctx, args)?;
    let rewrite = ctx.rewriter()?.rewrite(&formula)?;

    if ctx.json {
        output_json(&rewrite);
    } else {
        print_line(&rewrite.output);
    }
    Ok(())
}
