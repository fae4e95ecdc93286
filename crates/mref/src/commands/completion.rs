//! `mref completion <shell>` -- shell completion scripts via clap_complete.

use std::io;

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::{Cli, CompletionArgs};

/// Write the completion script for `args.shell` to stdout.
pub fn run(args: &CompletionArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, bin, &mut io::stdout());
    Ok(())
}
