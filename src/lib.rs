//! bobbin-tests - interactive test runner for the bobbin emulator
//!
//! Starts bobbin on a pseudo-terminal once per test case, feeds it
//! keystrokes, and waits for expected output with a fixed timeout.

pub mod cli;
pub mod common;
pub mod session;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use session::{Interact, Spawner};
pub use testing::{Outcome, Registry, RunStatus, TestCase};
