//! `mref` -- rewrite single-letter formulas into indexed-array accesses.
//!
//! Parses CLI arguments with clap, resolves configuration into a runtime
//! context, and dispatches to command handlers. With no subcommand the
//! configured formula is rewritten and printed.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    // Logging goes to stderr so stdout stays a single result line.
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("mref=debug,mref_core=debug,mref_config=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = RuntimeContext::from_global_args(&cli.global).and_then(|ctx| match cli.command {
        Some(Commands::Rewrite(args)) => commands::rewrite::run(&ctx, &args),
        Some(Commands::Normalize(args)) => commands::normalize::run(&ctx, &args),
        Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, &args),
        Some(Commands::Completion(args)) => commands::completion::run(&args),
        None => commands::rewrite::run(&ctx, &Default::default()),
    });

    // Handle errors: print message and exit with code 1
    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
