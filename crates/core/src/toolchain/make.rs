//! make-driven builds for Linux and macOS

use std::path::Path;

use crate::{
    command::LaunchCommand, error::Result, settings::Context, types::BuildConfig,
};

use super::Toolchain;

/// `make config=<label>` with binaries launched directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct MakeToolchain;

impl MakeToolchain {
    pub fn new() -> Self {
        Self
    }
}

impl Toolchain for MakeToolchain {
    fn name(&self) -> &'static str {
        "make"
    }

    fn build_command(&self, ctx: &Context, config: BuildConfig) -> Result<LaunchCommand> {
        Ok(LaunchCommand::new(&ctx.settings.toolchain.make_program)
            .with_arg(format!("config={}", config.as_str()))
            .with_working_dir(&ctx.cwd))
    }

    fn run_command(&self, ctx: &Context, config: BuildConfig, target: &str) -> LaunchCommand {
        let exe = ctx.executable_path(config, target);
        direct(&exe)
    }

    fn test_command(&self, _ctx: &Context, binary: &Path) -> LaunchCommand {
        direct(binary)
    }
}

/// Invoke `exe` with its own directory as the working directory.
fn direct(exe: &Path) -> LaunchCommand {
    let command = LaunchCommand::new(exe.to_string_lossy());
    match exe.parent() {
        Some(dir) => command.with_working_dir(dir),
        None => command,
    }
}
