use anyhow::{Context as _, Result};
use buildrun_core::{Context, exit_code, select_toolchain};
use serde_json::json;

/// Print the resolved settings and host platform as JSON.
pub fn info_command() -> Result<i32> {
    let ctx = Context::from_env().context("Failed to resolve project settings")?;
    let toolchain = select_toolchain(&ctx.host);

    let report = json!({
        "cwd": ctx.cwd,
        "host": ctx.host,
        "toolchain": toolchain.as_ref().map(|t| t.name()),
        "settings": ctx.settings,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(exit_code::SUCCESS)
}
