//! Interactive test runner
//!
//! Test cases are registered explicitly in a [`Registry`] and run one at a
//! time against a fresh bobbin process attached to a pseudo-terminal.

mod case;
mod runner;
pub mod suite;

pub use case::{Body, Outcome, Registry, TestCase};
pub use runner::{run, RunOptions, RunStatus};
