use std::fmt;

use serde::Serialize;

/// Host operating systems the launcher knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "windows" => Some(Platform::Windows),
            "linux" => Some(Platform::Linux),
            "macos" => Some(Platform::MacOs),
            _ => None,
        }
    }

    /// Suffix of executables produced by the native toolchain.
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Linux | Platform::MacOs => "",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        })
    }
}

/// Platform identity of the running process, fixed at construction.
///
/// An unrecognized host has no platform and all three predicates are false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Host {
    os: &'static str,
    platform: Option<Platform>,
}

impl Host {
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &'static str) -> Self {
        let platform = Platform::from_os(os);
        if platform.is_none() {
            tracing::warn!("Unsupported host platform: {}", os);
        }
        Self { os, platform }
    }

    pub fn platform(&self) -> Option<Platform> {
        self.platform
    }

    pub fn os(&self) -> &'static str {
        self.os
    }

    pub fn is_windows(&self) -> bool {
        self.platform == Some(Platform::Windows)
    }

    pub fn is_linux(&self) -> bool {
        self.platform == Some(Platform::Linux)
    }

    pub fn is_macos(&self) -> bool {
        self.platform == Some(Platform::MacOs)
    }

    /// Executable suffix for this host; unsupported hosts use none.
    pub fn exe_suffix(&self) -> &'static str {
        self.platform.map(|p| p.exe_suffix()).unwrap_or("")
    }
}
