use anyhow::{Context as _, Result};
use buildrun_core::{ArgMap, Context, RunLauncher, RunRequest, launch_toolchain};
use tracing::debug;

use super::executor;

/// Run entry: `-c <config>`, `-p <project>`, `-t <unit|all|false>`.
pub fn run_command(tokens: &[String], dry_run: bool) -> Result<i32> {
    let args = ArgMap::parse(tokens);
    let ctx = Context::from_env().context("Failed to resolve project settings")?;
    let request = RunRequest::from_args(&args, &ctx)?;

    debug!("Run request: {:?}", request);

    let toolchain = launch_toolchain(&ctx.host);
    let executor = executor(dry_run);
    let code = RunLauncher::new(&ctx, toolchain.as_ref(), executor.as_ref())
        .execute(&request)
        .with_context(|| format!("Failed to run {}", request.project))?;

    Ok(code)
}
