//! MSBuild-driven builds for Windows

use std::path::{Path, PathBuf};

use crate::{
    command::LaunchCommand,
    error::{Error, Result},
    settings::{Context, ToolchainSettings},
    types::BuildConfig,
};

use super::Toolchain;

/// Builds `<project>.sln` with MSBuild and launches through the wrapper script.
#[derive(Debug, Default, Clone, Copy)]
pub struct MsBuildToolchain;

impl MsBuildToolchain {
    pub fn new() -> Self {
        Self
    }

    /// First existing MSBuild: the environment-derived path, then each known
    /// install location in order.
    pub fn locate(settings: &ToolchainSettings) -> Result<PathBuf> {
        Self::locate_with(settings, settings.msbuild_env.resolve(), |p| p.is_file())
    }

    pub fn locate_with(
        settings: &ToolchainSettings,
        from_env: Option<PathBuf>,
        exists: impl Fn(&Path) -> bool,
    ) -> Result<PathBuf> {
        let searched: Vec<PathBuf> = from_env
            .into_iter()
            .chain(settings.msbuild_candidates.iter().cloned())
            .collect();

        for candidate in &searched {
            if exists(candidate) {
                tracing::debug!("Using MSBuild at {}", candidate.display());
                return Ok(candidate.clone());
            }
            tracing::debug!("MSBuild not at {}", candidate.display());
        }

        Err(Error::ToolchainNotFound { searched })
    }

    pub fn build_command_with(
        ctx: &Context,
        msbuild: &Path,
        config: BuildConfig,
    ) -> LaunchCommand {
        LaunchCommand::cmd_script(msbuild.to_string_lossy())
            .with_args([
                format!("{}.sln", ctx.settings.project_name),
                format!("/property:Configuration={}", config.toolchain_label()),
            ])
            .with_working_dir(&ctx.cwd)
    }

    /// `cmd.exe /c <tools>\<wrapper> <configuration> <target>` from the working directory.
    fn wrapper_command(ctx: &Context, configuration: &str, target: &str) -> LaunchCommand {
        LaunchCommand::cmd_script(ctx.wrapper_script())
            .with_args([configuration, target])
            .with_working_dir(&ctx.cwd)
    }
}

impl Toolchain for MsBuildToolchain {
    fn name(&self) -> &'static str {
        "msbuild"
    }

    fn build_command(&self, ctx: &Context, config: BuildConfig) -> Result<LaunchCommand> {
        let msbuild = Self::locate(&ctx.settings.toolchain)?;
        Ok(Self::build_command_with(ctx, &msbuild, config))
    }

    fn run_command(&self, ctx: &Context, config: BuildConfig, target: &str) -> LaunchCommand {
        Self::wrapper_command(ctx, config.output_dir(), target)
    }

    fn test_command(&self, ctx: &Context, binary: &Path) -> LaunchCommand {
        let stem = binary
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::wrapper_command(ctx, BuildConfig::Debug.output_dir(), &stem)
    }
}
