use std::process::ExitStatus;

use crate::error::Result;
use crate::exit_code;

use super::LaunchCommand;

/// Runs a [`LaunchCommand`] to completion and reports its exit status.
pub trait CommandExecutor {
    fn execute(&self, command: &LaunchCommand) -> Result<i32>;
}

/// Spawns real processes, one at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn execute(&self, command: &LaunchCommand) -> Result<i32> {
        tracing::info!("Executing: {}", command.to_shell_command());
        if let Some(dir) = command.working_dir() {
            tracing::debug!("Working directory: {}", dir.display());
        }

        let status = command.execute()?;
        let code = status_code(status);
        tracing::debug!("{} exited with {}", command.program, code);
        Ok(code)
    }
}

/// Prints commands instead of running them; every command "succeeds".
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunExecutor;

impl CommandExecutor for DryRunExecutor {
    fn execute(&self, command: &LaunchCommand) -> Result<i32> {
        println!("{}", command.to_shell_command());
        if let Some(dir) = command.working_dir() {
            println!("Working directory: {}", dir.display());
        }
        Ok(exit_code::SUCCESS)
    }
}

/// Exit code of a finished child. A child killed by a signal reports failure.
pub fn status_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(exit_code::FAILURE)
}
