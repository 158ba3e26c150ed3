use std::io;
use std::path::PathBuf;

use crate::exit_code;

/// Errors that can occur during buildrun operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No build tool found (searched: {})", display_paths(.searched))]
    ToolchainNotFound { searched: Vec<PathBuf> },

    #[error("Test not found: {}", .0.display())]
    TestNotFound(PathBuf),

    #[error("Unknown build configuration '{0}' (expected 'debug' or 'release')")]
    UnknownConfiguration(String),

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status reported for this error.
    ///
    /// Only conditions without an underlying process get a synthetic status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ToolchainNotFound { .. } => exit_code::TOOLCHAIN_NOT_FOUND,
            Error::TestNotFound(_) => exit_code::TEST_NOT_FOUND,
            Error::UnknownConfiguration(_) | Error::Config(_) | Error::Serialization(_) => {
                exit_code::USAGE
            }
            Error::Spawn { .. } => exit_code::SPAWN_FAILED,
            Error::Io(_) => exit_code::FAILURE,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for buildrun operations
pub type Result<T> = std::result::Result<T, Error>;
