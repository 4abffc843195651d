//! CLI argument handling
//!
//! Loads configuration, then either lists or runs the built-in suite.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::common::config::{Config, Overrides};
use crate::common::Result;
use crate::session::PtySpawner;
use crate::testing::{self, suite, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "bobbin-tests", about = "Interactive test runner for the bobbin emulator")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Print error detail for failing tests
    #[arg(long, short)]
    pub verbose: bool,

    /// List registered tests and exit
    #[arg(long)]
    pub list: bool,

    /// Configuration file (default: platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the bobbin binary
    #[arg(long)]
    pub bobbin: Option<PathBuf>,

    /// Directory holding the ROM images
    #[arg(long)]
    pub rom_dir: Option<PathBuf>,

    /// Timeout for each expectation wait, in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// Run the CLI, returning the process exit code
pub fn dispatch(cli: Cli) -> Result<i32> {
    let registry = suite::registry();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        for name in registry.names() {
            writeln!(out, "{name}")?;
        }
        return Ok(0);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(Overrides {
        binary: cli.bobbin,
        rom_dir: cli.rom_dir,
        expect_ms: cli.timeout_ms,
    })?;

    config.export_rom_dir();

    let spawner = PtySpawner::new(config.subject_binary(), config.expect_timeout());
    tracing::debug!(
        program = %spawner.program().display(),
        tests = registry.len(),
        "Starting run"
    );

    let options = RunOptions {
        verbose: cli.verbose,
    };
    let status = testing::run(&registry, &spawner, options, &mut out)?;
    Ok(status.exit_code())
}
