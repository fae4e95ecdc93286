//! `mref normalize` -- whitespace removal and implicit multiplication only.

use anyhow::Result;

use crate::cli::InputArgs;
use crate::commands::read_formula;
use crate::context::RuntimeContext;
use crate::output::{output_json, print_line};

/// Execute the `mref normalize` command.
pub fn run(ctx: &RuntimeContext, args: &InputArgs) -> Result<()> {
    let formula = read_formula(ctx, args)?;
    let normalized = ctx.rewriter()?.normalize(&formula)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "source": formula,
            "normalized": normalized,
        }));
    } else {
        print_line(&normalized);
    }
    Ok(())
}
