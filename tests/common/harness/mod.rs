//! Test harness for CLI integration tests.
//!
//! Provides isolated data and config directories plus CLI assertion helpers
//! using `assert_cmd`.

mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::NotelistCommand;
#[allow(unused_imports)]
pub use env::{TEST_PASSWORD, TEST_USER, TestEnv};
