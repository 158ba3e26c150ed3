pub mod build;
pub mod info;
pub mod run;

use buildrun_core::{CommandExecutor, DryRunExecutor, SystemExecutor};

pub use build::build_command;
pub use info::info_command;
pub use run::run_command;

fn executor(dry_run: bool) -> Box<dyn CommandExecutor> {
    if dry_run {
        Box::new(DryRunExecutor)
    } else {
        Box::new(SystemExecutor)
    }
}
