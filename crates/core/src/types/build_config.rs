use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Build configuration selected with `-c`.
///
/// The lowercase form is canonical: it is what callers compare against and
/// what make-style toolchains receive. Only [`BuildConfig::toolchain_label`]
/// and [`BuildConfig::output_dir`] produce the capitalized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildConfig {
    #[default]
    Debug,
    Release,
}

impl BuildConfig {
    pub const ALL: [BuildConfig; 2] = [BuildConfig::Debug, BuildConfig::Release];

    /// Parse a CLI-facing label. Case is normalized before matching.
    pub fn parse(label: &str) -> Result<Self> {
        match label.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildConfig::Debug),
            "release" => Ok(BuildConfig::Release),
            _ => Err(Error::UnknownConfiguration(label.to_string())),
        }
    }

    /// Canonical lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfig::Debug => "debug",
            BuildConfig::Release => "release",
        }
    }

    /// Label handed to toolchains that expect a capitalized configuration.
    pub fn toolchain_label(&self) -> &'static str {
        match self {
            BuildConfig::Debug => "Debug",
            BuildConfig::Release => "Release",
        }
    }

    /// Name of the directory under the output root holding this configuration's binaries.
    pub fn output_dir(&self) -> &'static str {
        self.toolchain_label()
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
