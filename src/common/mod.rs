//! Common utilities shared by the runner and the session layer

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
