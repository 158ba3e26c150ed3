use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{build_command, info_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "buildrun")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug           Enable debug logging\n    BUILDRUN_CONFIG=<path>   Use this settings file instead of searching for .buildrun.json")]
pub struct Cli {
    /// Print commands without executing them
    #[arg(short, long)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the project: -c <debug|release>
    #[command(visible_alias = "b")]
    Build {
        /// Flag tokens, passed through unparsed (e.g. -c release)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Run the built executable or its tests: -c <config> -p <project> -t <unit|all>
    #[command(visible_alias = "r")]
    Run {
        /// Flag tokens, passed through unparsed (e.g. -p widget -t lexer)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show the resolved project settings and host platform
    Info,
}

impl Cli {
    /// Execute the selected command and return the process exit status
    pub fn execute(self) -> Result<i32> {
        match self.command {
            Commands::Build { args } => build_command(&args, self.dry_run),
            Commands::Run { args } => run_command(&args, self.dry_run),
            Commands::Info => info_command(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_tokens_pass_through() {
        let cli = Cli::parse_from(["buildrun", "run", "-c", "release", "-p", "widget", "--odd"]);
        match cli.command {
            Commands::Run { args } => {
                assert_eq!(args, vec!["-c", "release", "-p", "widget", "--odd"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_dry_run_before_subcommand() {
        let cli = Cli::parse_from(["buildrun", "--dry-run", "build"]);
        assert!(cli.dry_run);
        assert!(matches!(cli.command, Commands::Build { ref args } if args.is_empty()));
    }
}
