pub mod cli;
pub mod commands;

use std::path::Path;

use anyhow::Result;
use buildrun_core::exit_code;

// Re-export commonly used items
pub use cli::{Cli, Commands};

/// Entry points reachable by invoking the binary under another name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Build,
    Run,
}

impl Entry {
    /// Entry selected by the program name, e.g. a `buildsln` or `run` link.
    pub fn from_program_name(argv0: &str) -> Option<Self> {
        let stem = Path::new(argv0).file_stem()?.to_str()?;
        match stem {
            "buildsln" => Some(Entry::Build),
            "run" => Some(Entry::Run),
            _ => None,
        }
    }

    pub fn execute(self, tokens: &[String]) -> Result<i32> {
        match self {
            Entry::Build => commands::build_command(tokens, false),
            Entry::Run => commands::run_command(tokens, false),
        }
    }
}

/// Initialize tracing based on RUST_LOG; logs go to stderr.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Exit status for a command result, printing any error.
pub fn exit_status(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            err.downcast_ref::<buildrun_core::Error>()
                .map(buildrun_core::Error::exit_code)
                .unwrap_or(exit_code::FAILURE)
        }
    }
}
