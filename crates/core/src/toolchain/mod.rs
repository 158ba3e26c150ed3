//! Platform toolchains: how a configuration is built and how a target is launched.

pub mod make;
pub mod msbuild;

use std::path::Path;

use crate::{
    command::{CommandExecutor, LaunchCommand},
    error::Result,
    platform::{Host, Platform},
    settings::Context,
    types::BuildConfig,
};

pub use make::MakeToolchain;
pub use msbuild::MsBuildToolchain;

/// One implementation per supported platform, selected once from the host.
pub trait Toolchain {
    /// Name of this toolchain for display.
    fn name(&self) -> &'static str;

    /// Command that builds `config`. Fails when the build tool cannot be located.
    fn build_command(&self, ctx: &Context, config: BuildConfig) -> Result<LaunchCommand>;

    /// Command that launches the built `target` for `config`.
    fn run_command(&self, ctx: &Context, config: BuildConfig, target: &str) -> LaunchCommand;

    /// Command that runs one test binary from the debug output tree.
    fn test_command(&self, ctx: &Context, binary: &Path) -> LaunchCommand;

    fn build(
        &self,
        ctx: &Context,
        config: BuildConfig,
        executor: &dyn CommandExecutor,
    ) -> Result<i32> {
        let command = self.build_command(ctx, config)?;
        executor.execute(&command)
    }

    fn run(
        &self,
        ctx: &Context,
        config: BuildConfig,
        target: &str,
        executor: &dyn CommandExecutor,
    ) -> Result<i32> {
        let command = self.run_command(ctx, config, target);
        println!("Running: {}", command.to_shell_command());
        executor.execute(&command)
    }
}

/// Toolchain for the host, or `None` on an unsupported platform.
pub fn select_toolchain(host: &Host) -> Option<Box<dyn Toolchain>> {
    let toolchain: Box<dyn Toolchain> = match host.platform()? {
        Platform::Windows => Box::new(MsBuildToolchain::new()),
        Platform::Linux | Platform::MacOs => Box::new(MakeToolchain::new()),
    };
    tracing::debug!("Selected {} toolchain for {}", toolchain.name(), host.os());
    Some(toolchain)
}

/// Toolchain used to launch executables and test binaries.
///
/// Only Windows goes through the wrapper script; every other host, including
/// unrecognized ones, invokes binaries directly.
pub fn launch_toolchain(host: &Host) -> Box<dyn Toolchain> {
    match host.platform() {
        Some(Platform::Windows) => Box::new(MsBuildToolchain::new()),
        _ => Box::new(MakeToolchain::new()),
    }
}
