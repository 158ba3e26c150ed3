//! Subprocess description and execution

pub mod executor;
pub mod launch_command;

// Re-export commonly used types
pub use executor::{CommandExecutor, DryRunExecutor, SystemExecutor, status_code};
pub use launch_command::LaunchCommand;
