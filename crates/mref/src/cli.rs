//! Clap CLI definitions for the `mref` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// mref -- formula to indexed-array rewriter.
///
/// Strips whitespace, makes implicit multiplication explicit, and rewrites
/// each single-letter variable into an array access (`a` -> `m[0]`).
#[derive(Parser, Debug)]
#[command(
    name = "mref",
    about = "Rewrite single-letter formulas into indexed-array accesses",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: nearest mref.yaml / mref.yml / mref.toml).
    #[arg(long, global = true, env = "MREF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Array name used in the rewritten accesses.
    #[arg(long, global = true)]
    pub array: Option<String>,

    /// Reject characters outside a-z and + - * / ( ) , { }.
    #[arg(long, global = true, overrides_with = "lenient")]
    pub strict: bool,

    /// Rewrite any character, even when config enables strict mode.
    #[arg(long, global = true, overrides_with = "strict")]
    pub lenient: bool,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite a formula (the default when no subcommand is given).
    Rewrite(InputArgs),

    /// Print the normalized formula without substituting variables.
    Normalize(InputArgs),

    /// Show the effective configuration or write a starter config file.
    Config(ConfigArgs),

    /// Print a shell completion script to stdout.
    Completion(CompletionArgs),
}

/// Where the formula comes from. Falls back to the configured formula.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Formula text.
    #[arg(conflicts_with = "file")]
    pub formula: Option<String>,

    /// Read the formula from a file (`-` for stdin).
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

/// Arguments for `mref config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the effective configuration to ./mref.yaml.
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing file with --init.
    #[arg(long, requires = "init")]
    pub force: bool,
}

/// Arguments for `mref completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Target shell.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_no_subcommand() {
        let cli = Cli::try_parse_from(["mref"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.global.strict);
    }

    #[test]
    fn formula_and_file_conflict() {
        let res = Cli::try_parse_from(["mref", "rewrite", "ab", "--file", "x.txt"]);
        assert!(res.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mref", "rewrite", "ab", "--array", "q", "--strict"]).unwrap();
        assert_eq!(cli.global.array.as_deref(), Some("q"));
        assert!(cli.global.strict);
        match cli.command {
            Some(Commands::Rewrite(args)) => assert_eq!(args.formula.as_deref(), Some("ab")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn last_of_strict_and_lenient_wins() {
        let cli = Cli::try_parse_from(["mref", "--strict", "--lenient"]).unwrap();
        assert!(!cli.global.strict);
        assert!(cli.global.lenient);

        let cli = Cli::try_parse_from(["mref", "--lenient", "--strict"]).unwrap();
        assert!(cli.global.strict);
        assert!(!cli.global.lenient);
    }

    #[test]
    fn completion_takes_shell_name() {
        let cli = Cli::try_parse_from(["mref", "completion", "zsh"]).unwrap();
        match cli.command {
            Some(Commands::Completion(args)) => assert_eq!(args.shell, Shell::Zsh),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["mref", "completion", "tcsh"]).is_err());
    }
}
