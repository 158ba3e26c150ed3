use anyhow::{Context as _, Result};
use buildrun_core::{ArgMap, BuildOrchestrator, Context, build::config_from_args, select_toolchain};
use tracing::debug;

use super::executor;

/// Build entry: `-c <config>` (default debug). Returns the build tool's status.
pub fn build_command(tokens: &[String], dry_run: bool) -> Result<i32> {
    let args = ArgMap::parse(tokens);
    println!("{args}");

    let config = config_from_args(&args)?;
    let ctx = Context::from_env().context("Failed to resolve project settings")?;
    debug!("Build context: {:?}", ctx);

    let toolchain = select_toolchain(&ctx.host);
    let executor = executor(dry_run);
    let outcome =
        BuildOrchestrator::new(&ctx, toolchain.as_deref(), executor.as_ref()).build(config)?;

    Ok(outcome.exit_code())
}
