//! Test binary discovery and execution

pub mod discovery;
pub mod runner;

#[cfg(test)]
pub(crate) mod fake;

pub use discovery::{discover_test_binaries, is_test_binary};
pub use runner::{TestOutcome, TestRunner};
