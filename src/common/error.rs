//! Error types for the bobbin test runner
//!
//! Every variant is eventually folded into a per-test outcome by the runner;
//! only configuration errors ever reach `main`.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the test runner
#[derive(Error, Debug)]
pub enum Error {
    // === Session Errors ===
    #[error("Failed to spawn '{program}': {error}")]
    Spawn { program: String, error: String },

    #[error("Timed out after {timeout_ms} ms waiting for pattern '{pattern}'")]
    ExpectTimeout { pattern: String, timeout_ms: u64 },

    #[error("Subject closed its terminal while waiting for pattern '{pattern}'")]
    UnexpectedEof { pattern: String },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Pseudo-terminal error: {0}")]
    Pty(String),

    // === Test Errors ===
    #[error("Test assertion failed: {0}")]
    TestAssertion(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create a spawn error for the given program
    pub fn spawn<E: std::fmt::Display>(program: &str, error: E) -> Self {
        Self::Spawn {
            program: program.to_string(),
            error: error.to_string(),
        }
    }

    /// Create an expectation timeout error
    pub fn expect_timeout(pattern: &str, timeout_ms: u64) -> Self {
        Self::ExpectTimeout {
            pattern: pattern.to_string(),
            timeout_ms,
        }
    }

    /// Create an assertion error
    pub fn assertion<S: Into<String>>(message: S) -> Self {
        Self::TestAssertion(message.into())
    }

    /// Whether this error is an expectation wait that ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ExpectTimeout { .. })
    }
}
