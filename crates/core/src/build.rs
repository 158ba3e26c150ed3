//! Build orchestration: resolve the toolchain, build once, propagate the status.

use crate::{
    args::ArgMap, command::CommandExecutor, error::Result, exit_code, settings::Context,
    toolchain::Toolchain, types::BuildConfig,
};

/// Build entry: `-c <config>`, default `debug`.
pub fn config_from_args(args: &ArgMap) -> Result<BuildConfig> {
    BuildConfig::parse(args.get('c', BuildConfig::default().as_str()))
}

/// Result of one build invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Succeeded,
    /// The build tool exited nonzero with this status.
    Failed(i32),
    /// No toolchain exists for the host, nothing was invoked.
    Skipped,
}

impl BuildOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildOutcome::Succeeded | BuildOutcome::Skipped => exit_code::SUCCESS,
            BuildOutcome::Failed(code) => *code,
        }
    }
}

pub struct BuildOrchestrator<'a> {
    ctx: &'a Context,
    toolchain: Option<&'a dyn Toolchain>,
    executor: &'a dyn CommandExecutor,
}

impl<'a> BuildOrchestrator<'a> {
    pub fn new(
        ctx: &'a Context,
        toolchain: Option<&'a dyn Toolchain>,
        executor: &'a dyn CommandExecutor,
    ) -> Self {
        Self {
            ctx,
            toolchain,
            executor,
        }
    }

    /// True when no executable exists yet for `config`. Informational only.
    pub fn is_first_build(&self, config: BuildConfig) -> bool {
        !self
            .ctx
            .executable_path(config, &self.ctx.settings.exe_name)
            .exists()
    }

    pub fn build(&self, config: BuildConfig) -> Result<BuildOutcome> {
        println!(
            "Building {} in [{}] Configuration\n",
            self.ctx.settings.exe_name, config
        );

        if self.is_first_build(config) {
            println!("First {} build, no existing executable", config);
        } else {
            tracing::debug!("Incremental {} build", config);
        }

        let Some(toolchain) = self.toolchain else {
            tracing::warn!(
                "No toolchain for host '{}', no build invoked",
                self.ctx.host.os()
            );
            println!("No toolchain action taken for host '{}'", self.ctx.host.os());
            return Ok(BuildOutcome::Skipped);
        };

        let status = toolchain.build(self.ctx, config, self.executor)?;
        if status != exit_code::SUCCESS {
            tracing::error!("{} build failed with status {}", toolchain.name(), status);
            return Ok(BuildOutcome::Failed(status));
        }

        tracing::info!("{} build finished", toolchain.name());
        Ok(BuildOutcome::Succeeded)
    }
}
