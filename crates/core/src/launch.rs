//! Run entry: launch a built executable, or hand off to the test runner.

use crate::{
    args::{ArgMap, TestSelector},
    command::CommandExecutor,
    error::Result,
    settings::Context,
    testing::TestRunner,
    toolchain::Toolchain,
    types::BuildConfig,
};

/// Fully resolved run-entry arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub config: BuildConfig,
    pub project: String,
    pub tests: TestSelector,
}

impl RunRequest {
    /// `-c <config>` (debug), `-p <project>` (exe name), `-t <unit|all|false>` (false)
    pub fn from_args(args: &ArgMap, ctx: &Context) -> Result<Self> {
        Ok(Self {
            config: BuildConfig::parse(args.get('c', BuildConfig::default().as_str()))?,
            project: args.get('p', &ctx.settings.exe_name).to_string(),
            tests: TestSelector::from_args(args),
        })
    }
}

pub struct RunLauncher<'a> {
    ctx: &'a Context,
    toolchain: &'a dyn Toolchain,
    executor: &'a dyn CommandExecutor,
}

impl<'a> RunLauncher<'a> {
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

    /// Run tests when requested, otherwise launch `request.project`.
    /// The returned status is the process's final exit status.
    pub fn execute(&self, request: &RunRequest) -> Result<i32> {
        let tests = TestRunner::new(self.ctx, self.toolchain, self.executor);
        if let Some(code) = tests.run(&request.tests)? {
            return Ok(code);
        }

        tracing::debug!(
            "Launching {} [{}] with {}",
            request.project,
            request.config.output_dir(),
            self.toolchain.name()
        );
        self.toolchain.run(self.ctx, request.config, &request.project, self.executor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        exit_code,
        platform::Host,
        settings::Settings,
        testing::fake::RecordingExecutor,
        toolchain::{MakeToolchain, MsBuildToolchain, launch_toolchain},
    };
    use std::path::{Path, PathBuf};

    fn ctx(os: &'static str) -> Context {
        let settings = Settings {
            exe_name: "ylang".to_string(),
            ..Settings::default()
        };
        Context::new(settings, Host::from_os(os), "/work")
    }

    #[test]
    fn test_request_defaults() {
        let request = RunRequest::from_args(&ArgMap::default(), &ctx("linux")).unwrap();
        assert_eq!(
            request,
            RunRequest {
                config: BuildConfig::Debug,
                project: "ylang".to_string(),
                tests: TestSelector::None,
            }
        );
    }

    #[test]
    fn test_request_rejects_unknown_config() {
        let args = ArgMap::parse(["-c", "fastest"]);
        let err = RunRequest::from_args(&args, &ctx("linux")).unwrap_err();
        assert!(matches!(err, Error::UnknownConfiguration(_)));
    }

    #[test]
    fn test_release_widget_on_unix() {
        let ctx = ctx("linux");
        let args = ArgMap::parse(["-c", "release", "-p", "widget"]);
        let request = RunRequest::from_args(&args, &ctx).unwrap();
        let executor = RecordingExecutor::with_statuses([17]);

        let code = RunLauncher::new(&ctx, &MakeToolchain, &executor)
            .execute(&request)
            .unwrap();

        assert_eq!(code, 17);
        let calls = executor.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            PathBuf::from(&calls[0].program),
            PathBuf::from("/work/bin/Release/widget")
        );
        assert_eq!(calls[0].working_dir(), Some(Path::new("/work/bin/Release")));
    }

    #[test]
    fn test_windows_launch_uses_wrapper_with_display_config() {
        let ctx = ctx("windows");
        let request = RunRequest::from_args(&ArgMap::parse(["-c", "release"]), &ctx).unwrap();
        let executor = RecordingExecutor::default();

        RunLauncher::new(&ctx, &MsBuildToolchain, &executor)
            .execute(&request)
            .unwrap();

        let calls = executor.calls();
        assert_eq!(calls[0].args, vec!["/c", r"tools\run.bat", "Release", "ylang"]);
        assert_eq!(calls[0].working_dir(), Some(Path::new("/work")));
    }

    #[test]
    fn test_test_selector_preempts_launch() {
        let ctx = ctx("linux");
        let request = RunRequest::from_args(&ArgMap::parse(["-t", "all"]), &ctx).unwrap();
        let executor = RecordingExecutor::default();

        // /work/bin/Debug does not exist: no tests, success, no launch
        let code = RunLauncher::new(&ctx, &MakeToolchain, &executor)
            .execute(&request)
            .unwrap();

        assert_eq!(code, 0);
        assert!(executor.calls().is_empty());
    }

    #[test]
    fn test_unrecognized_host_reports_missing_test() {
        let ctx = ctx("freebsd");
        let request = RunRequest::from_args(&ArgMap::parse(["-t", "lexer"]), &ctx).unwrap();
        let executor = RecordingExecutor::default();
        let toolchain = launch_toolchain(&ctx.host);

        let err = RunLauncher::new(&ctx, toolchain.as_ref(), &executor)
            .execute(&request)
            .unwrap_err();

        assert!(matches!(err, Error::TestNotFound(_)));
        assert_eq!(err.exit_code(), exit_code::TEST_NOT_FOUND);
        assert!(executor.calls().is_empty());
    }

    #[test]
    fn test_unrecognized_host_launches_directly() {
        let ctx = ctx("freebsd");
        let request = RunRequest::from_args(&ArgMap::default(), &ctx).unwrap();
        let executor = RecordingExecutor::with_statuses([4]);
        let toolchain = launch_toolchain(&ctx.host);

        let code = RunLauncher::new(&ctx, toolchain.as_ref(), &executor)
            .execute(&request)
            .unwrap();

        assert_eq!(code, 4);
        let calls = executor.calls();
        assert_eq!(PathBuf::from(&calls[0].program), PathBuf::from("/work/bin/Debug/ylang"));
        assert_eq!(calls[0].working_dir(), Some(Path::new("/work/bin/Debug")));
    }
}
