//! Static project metadata consumed by every entry point.
//!
//! The defaults are the literal placeholders the project setup step replaces
//! with the real project name, so an unconfigured checkout still resolves.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::platform::Host;
use crate::types::BuildConfig;

pub const SETTINGS_FILE_NAMES: [&str; 2] = [".buildrun.json", "buildrun.json"];

/// Environment variable pointing at an explicit settings file.
pub const SETTINGS_ENV: &str = "BUILDRUN_CONFIG";

const PLACEHOLDER_NAME: &str = "project";

const MSBUILD_2022: &str =
    r"C:\Program Files (x86)\Microsoft Visual Studio\2022\Community\MSBuild\Current\Bin\MSBuild.exe";
const MSBUILD_2019: &str =
    r"C:\Program Files (x86)\Microsoft Visual Studio\2019\Community\MSBuild\Current\Bin\MSBuild.exe";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name of the built executable, and the default `-p` target.
    pub exe_name: String,
    /// Solution name; the Windows build drives `<project_name>.sln`.
    pub project_name: String,
    /// Directory holding the platform wrapper script, relative to the working directory.
    pub tools_dir: String,
    pub wrapper_script: String,
    /// Root of the `<root>/<Configuration>/` output tree.
    pub output_root: String,
    pub toolchain: ToolchainSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            exe_name: PLACEHOLDER_NAME.to_string(),
            project_name: PLACEHOLDER_NAME.to_string(),
            tools_dir: "tools".to_string(),
            wrapper_script: "run.bat".to_string(),
            output_root: "bin".to_string(),
            toolchain: ToolchainSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// make-style program used on Linux and macOS.
    pub make_program: String,
    /// Known MSBuild locations, newest first.
    pub msbuild_candidates: Vec<PathBuf>,
    pub msbuild_env: MsBuildEnv,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            make_program: "make".to_string(),
            msbuild_candidates: vec![PathBuf::from(MSBUILD_2022), PathBuf::from(MSBUILD_2019)],
            msbuild_env: MsBuildEnv::default(),
        }
    }
}

/// How the MSBuild location is derived from the environment.
///
/// When `strip_prefix` matches the start of the variable's value it is
/// replaced by `replace_with` (empty if unset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsBuildEnv {
    pub var: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_with: Option<String>,
}

impl Default for MsBuildEnv {
    fn default() -> Self {
        Self {
            var: "MSBUILD".to_string(),
            strip_prefix: None,
            replace_with: None,
        }
    }
}

impl MsBuildEnv {
    /// Turn the raw variable value into a path.
    pub fn transform(&self, raw: &str) -> Option<PathBuf> {
        let value = raw.trim().trim_matches('"');
        if value.is_empty() {
            return None;
        }

        let value = match self.strip_prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => match value.strip_prefix(prefix) {
                Some(rest) => format!("{}{}", self.replace_with.as_deref().unwrap_or(""), rest),
                None => value.to_string(),
            },
            _ => value.to_string(),
        };

        Some(PathBuf::from(value))
    }

    /// Read and transform the configured variable from the process environment.
    pub fn resolve(&self) -> Option<PathBuf> {
        let raw = std::env::var(&self.var).ok()?;
        let path = self.transform(&raw);
        tracing::debug!("{}={:?} resolved to {:?}", self.var, raw, path);
        path
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&contents).map_err(|e| {
            Error::Config(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(settings)
    }

    /// Walk up from `start_path` looking for a settings file.
    pub fn find_settings_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in SETTINGS_FILE_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load from `$BUILDRUN_CONFIG`, else the nearest settings file, else defaults.
    pub fn discover(start_path: &Path) -> Result<Self> {
        if let Some(explicit) = std::env::var_os(SETTINGS_ENV) {
            let path = PathBuf::from(explicit);
            tracing::debug!("Loading settings from ${}: {}", SETTINGS_ENV, path.display());
            return Self::load_from_file(&path);
        }

        match Self::find_settings_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("No settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Everything resolved once at process start and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub host: Host,
    pub cwd: PathBuf,
}

impl Context {
    pub fn new(settings: Settings, host: Host, cwd: impl Into<PathBuf>) -> Self {
        Self {
            settings,
            host,
            cwd: cwd.into(),
        }
    }

    /// Detect the host and discover settings from the current directory.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let settings = Settings::discover(&cwd)?;
        Ok(Self::new(settings, Host::detect(), cwd))
    }

    pub fn output_root(&self) -> PathBuf {
        self.cwd.join(&self.settings.output_root)
    }

    /// `<cwd>/<output_root>/<Configuration>/<target><exe-suffix>`
    pub fn executable_path(&self, config: BuildConfig, target: &str) -> PathBuf {
        self.output_root()
            .join(config.output_dir())
            .join(format!("{}{}", target, self.host.exe_suffix()))
    }

    /// `<tools_dir>\<wrapper_script>` as handed to `cmd.exe /c`.
    pub fn wrapper_script(&self) -> String {
        format!(
            "{}\\{}",
            self.settings.tools_dir, self.settings.wrapper_script
        )
    }
}
