//! buildrun-core - decision logic for the buildrun launcher
//!
//! This crate provides functionality to:
//! - Resolve `-x value` arguments and the static project settings
//! - Select the platform toolchain (MSBuild on Windows, make elsewhere)
//! - Build a configuration and propagate the build tool's exit status
//! - Discover and run test binaries from the debug output tree
//! - Launch a built executable
pub mod args;
pub mod build;
pub mod command;
pub mod error;
pub mod exit_code;
pub mod launch;
pub mod platform;
pub mod settings;
pub mod testing;
pub mod toolchain;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use args::{ArgMap, TestSelector};
pub use build::{BuildOrchestrator, BuildOutcome};
pub use command::{CommandExecutor, DryRunExecutor, LaunchCommand, SystemExecutor};
pub use launch::{RunLauncher, RunRequest};
pub use platform::{Host, Platform};
pub use settings::{Context, Settings};
pub use testing::{TestOutcome, TestRunner};
pub use toolchain::{Toolchain, launch_toolchain, select_toolchain};
