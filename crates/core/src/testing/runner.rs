use std::path::{Path, PathBuf};

use crate::{
    args::TestSelector,
    command::CommandExecutor,
    error::{Error, Result},
    exit_code,
    settings::Context,
    toolchain::Toolchain,
    types::BuildConfig,
};

use super::discovery::discover_test_binaries;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// Every executed binary exited zero. `ran` may be zero.
    Passed { ran: usize },
    /// The first binary that exited nonzero; nothing after it was run.
    Failed { binary: PathBuf, status: i32 },
}

/// Runs test binaries from the debug output tree, one at a time.
pub struct TestRunner<'a> {
    ctx: &'a Context,
    toolchain: &'a dyn Toolchain,
    executor: &'a dyn CommandExecutor,
}

impl<'a> TestRunner<'a> {
    pub fn new(
        ctx: &'a Context,
        toolchain: &'a dyn Toolchain,
        executor: &'a dyn CommandExecutor,
    ) -> Self {
        Self {
            ctx,
            toolchain,
            executor,
        }
    }

    /// `<cwd>/<output_root>/Debug`
    pub fn test_root(&self) -> PathBuf {
        self.ctx
            .output_root()
            .join(BuildConfig::Debug.output_dir())
    }

    /// `<test_root>/<unit>_tests/<unit>_tests<exe-suffix>`
    pub fn unit_path(&self, unit: &str) -> PathBuf {
        let name = format!("{unit}_tests");
        self.test_root()
            .join(&name)
            .join(format!("{name}{}", self.ctx.host.exe_suffix()))
    }

    /// Run the selected tests and map the result to a process status.
    ///
    /// Any failing binary reports [`exit_code::TEST_FAILED`], never the
    /// binary's own status, so it cannot collide with the not-found status.
    pub fn run(&self, selector: &TestSelector) -> Result<Option<i32>> {
        let outcome = match selector {
            TestSelector::None => return Ok(None),
            TestSelector::Unit(unit) => self.run_unit(unit)?,
            TestSelector::All => self.run_all()?,
        };
        let code = match outcome {
            TestOutcome::Passed { .. } => exit_code::SUCCESS,
            TestOutcome::Failed { .. } => exit_code::TEST_FAILED,
        };
        Ok(Some(code))
    }

    pub fn run_unit(&self, unit: &str) -> Result<TestOutcome> {
        let path = self.unit_path(unit);
        if !path.is_file() {
            eprintln!("Test not found: {}", path.display());
            return Err(Error::TestNotFound(path));
        }

        let status = self.run_binary(&path)?;
        Ok(self.outcome(path, status, 1))
    }

    /// Walk the debug output tree, stopping at the first failing binary.
    pub fn run_all(&self) -> Result<TestOutcome> {
        let root = self.test_root();
        let suffix = self.ctx.host.exe_suffix();
        let mut ran = 0;

        for binary in discover_test_binaries(&root, suffix) {
            let status = self.run_binary(&binary)?;
            ran += 1;
            if status != exit_code::SUCCESS {
                return Ok(self.outcome(binary, status, ran));
            }
        }

        if ran == 0 {
            tracing::info!("No test binaries under {}", root.display());
        }
        Ok(TestOutcome::Passed { ran })
    }

    fn run_binary(&self, binary: &Path) -> Result<i32> {
        println!("Running: {}", binary.display());
        let command = self.toolchain.test_command(self.ctx, binary);
        self.executor.execute(&command)
    }

    fn outcome(&self, binary: PathBuf, status: i32, ran: usize) -> TestOutcome {
        if status == exit_code::SUCCESS {
            return TestOutcome::Passed { ran };
        }
        let name = binary
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| binary.display().to_string());
        eprintln!("Test failed: {name}");
        tracing::error!("{} exited with status {}", binary.display(), status);
        TestOutcome::Failed { binary, status }
    }
}
