//! Process exit statuses used when no child process supplies one.

pub const SUCCESS: i32 = 0;

/// Generic failure, also used for children terminated without an exit code.
pub const FAILURE: i32 = 1;

/// Aggregate status of an all-units test run with at least one failing binary.
pub const TEST_FAILED: i32 = 1;

pub const TEST_NOT_FOUND: i32 = 2;

pub const TOOLCHAIN_NOT_FOUND: i32 = 3;

/// Bad configuration label or unreadable settings file.
pub const USAGE: i32 = 64;

/// The program could not be started at all.
pub const SPAWN_FAILED: i32 = 127;
